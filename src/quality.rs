//! Quality dial: one integer level progressively switching off optional effects.

use std::collections::BTreeSet;

/// Optional visual effects, in the order the dial disables them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityFeature {
    FontSizeAnimation,
    MicroJitter,
    PerGlyphOpacity,
    FillOpacityPulse,
    TrailFilter,
    Lightning,
}

impl QualityFeature {
    /// All features in priority order; level `L` disables the first `L`.
    pub const ALL: [QualityFeature; 6] = [
        QualityFeature::FontSizeAnimation,
        QualityFeature::MicroJitter,
        QualityFeature::PerGlyphOpacity,
        QualityFeature::FillOpacityPulse,
        QualityFeature::TrailFilter,
        QualityFeature::Lightning,
    ];

    /// 1-based level at which this feature switches off.
    pub fn step(self) -> u32 {
        self.index() as u32 + 1
    }

    fn index(self) -> usize {
        match self {
            Self::FontSizeAnimation => 0,
            Self::MicroJitter => 1,
            Self::PerGlyphOpacity => 2,
            Self::FillOpacityPulse => 3,
            Self::TrailFilter => 4,
            Self::Lightning => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::FontSizeAnimation => "Disable subtle per-glyph font-size pulsation.",
            Self::MicroJitter => "Disable the small additive transform jitters per glyph.",
            Self::PerGlyphOpacity => "Disable per-glyph opacity pulsing.",
            Self::FillOpacityPulse => "Disable fill-opacity shimmer on each glyph.",
            Self::TrailFilter => "Remove the blur-based trail filter.",
            Self::Lightning => "Remove the lightning overlay group.",
        }
    }
}

/// Highest meaningful level: every optional feature disabled.
pub const MAX_QUALITY_LEVEL: u32 = QualityFeature::ALL.len() as u32;

/// Resolved dial. A pure function of the clamped level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct QualityFlags {
    level: u32,
}

impl QualityFlags {
    /// Everything enabled (level 0).
    pub fn full() -> Self {
        Self { level: 0 }
    }

    /// Clamped level in `[0, MAX_QUALITY_LEVEL]`.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_disabled(&self, feature: QualityFeature) -> bool {
        self.level >= feature.step()
    }

    pub fn is_enabled(&self, feature: QualityFeature) -> bool {
        !self.is_disabled(feature)
    }

    /// Set of features switched off at this level.
    pub fn disabled(&self) -> BTreeSet<QualityFeature> {
        QualityFeature::ALL
            .into_iter()
            .filter(|f| self.is_disabled(*f))
            .collect()
    }
}

impl Default for QualityFlags {
    fn default() -> Self {
        Self::full()
    }
}

/// Clamp `requested` into `[0, MAX_QUALITY_LEVEL]` and derive the flags.
pub fn resolve_quality(requested: i64) -> QualityFlags {
    let level = requested.clamp(0, i64::from(MAX_QUALITY_LEVEL)) as u32;
    QualityFlags { level }
}

#[cfg(test)]
#[path = "../tests/unit/quality.rs"]
mod tests;
