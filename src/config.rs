//! Generation knobs, loadable from JSON and overridable from the command line.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{GlyphfallError, GlyphfallResult},
    layout::columns::ColumnRequest,
    library::BASE_COLUMNS,
    quality::{QualityFeature, QualityFlags, resolve_quality},
};

pub const DEFAULT_GLYPHS_PER_STRAND: i64 = 22;

/// Raw generation parameters.
///
/// Values are kept signed so out-of-range input survives deserialization; the
/// generator clamps them (see [`GenerateConfig::column_request`]) while the CLI
/// rejects them up front via [`GenerateConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Quality dial; each step disables one more effect.
    pub nice: i64,
    pub gps_min: i64,
    pub gps_max: i64,
    pub columns_regular: i64,
    pub columns_irregular: i64,
    pub include_lightning: bool,
    pub include_metadata: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            nice: 0,
            gps_min: DEFAULT_GLYPHS_PER_STRAND,
            gps_max: DEFAULT_GLYPHS_PER_STRAND,
            columns_regular: BASE_COLUMNS.len() as i64,
            columns_irregular: BASE_COLUMNS.len() as i64,
            include_lightning: true,
            include_metadata: true,
        }
    }
}

impl GenerateConfig {
    pub fn from_json_str(json: &str) -> GlyphfallResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> GlyphfallResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Strict checks applied to user input before generation.
    pub fn validate(&self) -> GlyphfallResult<()> {
        if self.nice < 0 {
            return Err(GlyphfallError::validation("nice must be >= 0"));
        }
        if self.gps_min < 1 {
            return Err(GlyphfallError::validation("gps_min must be >= 1"));
        }
        if self.gps_max < self.gps_min {
            return Err(GlyphfallError::validation("gps_max must be >= gps_min"));
        }
        if self.columns_regular < 0 {
            return Err(GlyphfallError::validation("columns_regular must be >= 0"));
        }
        if self.columns_irregular < 0 {
            return Err(GlyphfallError::validation("columns_irregular must be >= 0"));
        }
        Ok(())
    }

    pub fn quality(&self) -> QualityFlags {
        resolve_quality(self.nice)
    }

    /// Column request with negative counts floored to zero and glyph bounds repaired.
    pub fn column_request(&self) -> ColumnRequest {
        fn non_negative(v: i64) -> usize {
            usize::try_from(v.max(0)).unwrap_or(usize::MAX)
        }

        ColumnRequest {
            gps_min: non_negative(self.gps_min),
            gps_max: non_negative(self.gps_max),
            regular: non_negative(self.columns_regular),
            irregular: non_negative(self.columns_irregular),
        }
        .normalized()
    }

    /// Lightning is drawn only when requested and not disabled by the dial.
    pub fn lightning_enabled(&self) -> bool {
        self.include_lightning && self.quality().is_enabled(QualityFeature::Lightning)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
