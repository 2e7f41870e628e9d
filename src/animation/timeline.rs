use crate::{
    foundation::format::{format_list, format_points, format_secs},
    quality::{QualityFeature, QualityFlags},
};

/// Keyframe values of a declarative timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Keyframes {
    Scalars(Vec<f64>),
    Points(Vec<(f64, f64)>),
}

impl Keyframes {
    /// `values` attribute text.
    pub fn to_attr(&self) -> String {
        match self {
            Self::Scalars(v) => format_list(v),
            Self::Points(p) => format_points(p),
        }
    }

    /// Arithmetic mean of scalar keyframes; `None` for points or empty lists.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Self::Scalars(v) if !v.is_empty() => Some(v.iter().sum::<f64>() / v.len() as f64),
            _ => None,
        }
    }
}

/// An indefinitely repeating timeline: keyframes, duration and start offset (seconds).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    pub values: Keyframes,
    pub dur: f64,
    pub begin: f64,
}

impl Timeline {
    pub fn scalars(values: Vec<f64>, dur: f64, begin: f64) -> Self {
        Self {
            values: Keyframes::Scalars(values),
            dur,
            begin,
        }
    }

    pub fn points(values: Vec<(f64, f64)>, dur: f64, begin: f64) -> Self {
        Self {
            values: Keyframes::Points(values),
            dur,
            begin,
        }
    }

    pub fn dur_attr(&self) -> String {
        format_secs(self.dur)
    }

    pub fn begin_attr(&self) -> String {
        format_secs(self.begin)
    }

    /// Keep the timeline only while `feature` is enabled.
    pub fn gated(self, flags: &QualityFlags, feature: QualityFeature) -> Option<Self> {
        flags.is_enabled(feature).then_some(self)
    }
}

/// A property that is either animated or pinned to a static value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Animated(Timeline),
    Static(f64),
}

impl Channel {
    /// Animated while `feature` is enabled, otherwise pinned to `fallback`.
    pub fn gated(
        flags: &QualityFlags,
        feature: QualityFeature,
        timeline: Timeline,
        fallback: f64,
    ) -> Self {
        if flags.is_disabled(feature) {
            Self::Static(fallback)
        } else {
            Self::Animated(timeline)
        }
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        match self {
            Self::Animated(t) => Some(t),
            Self::Static(_) => None,
        }
    }

    pub fn static_value(&self) -> Option<f64> {
        match self {
            Self::Animated(_) => None,
            Self::Static(v) => Some(*v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
