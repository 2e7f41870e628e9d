//! Fixed lookup tables the generator draws from.
//!
//! Everything here is plain immutable data: the pattern pool, the base column library,
//! the extension glyph cycle and the irregular placement table. Generated columns clone
//! from these tables and never hold references back into them.

mod columns;
mod glyphs;
mod irregular;
mod patterns;

pub use columns::BASE_COLUMNS;
pub use glyphs::{ASSISTANT_GLYPH, EXTRA_GLYPH_CYCLE, K2_GLYPH, KTWO_GLYPH};
pub use irregular::IRREGULAR_SLOTS;
pub use patterns::PATTERNS;

/// A single glyph and its font size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Glyph {
    /// Text content; usually one character, signature glyphs are short words.
    pub text: &'static str,
    /// Font size in pixels.
    pub size: u32,
}

impl Glyph {
    pub const fn new(text: &'static str, size: u32) -> Self {
        Self { text, size }
    }
}

/// Reusable bundle of per-glyph timing curves.
///
/// Glyph `g` in column `c` uses `PATTERNS[(g + c) % PATTERNS.len()]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pattern {
    pub fill_values: &'static [f64],
    pub fill_dur: f64,
    pub fill_begin: f64,
    /// Closed translate path for the additive micro jitter.
    pub jitter_path: &'static [(f64, f64)],
    pub jitter_dur: f64,
    pub jitter_begin: f64,
    pub size_dur: f64,
    pub size_begin: f64,
    /// Font size delta (px) at the top of the size pulse.
    pub size_high: f64,
    /// Font size delta (px) at the bottom of the size pulse.
    pub size_low: f64,
}

/// One entry of the base column library.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnTemplate {
    /// Raw authoring x; replaced during layout.
    pub x: f64,
    /// Vertical offset at the start of the fall.
    pub fall_from: f64,
    /// Vertical offset at the end of the fall.
    pub fall_to: f64,
    pub fall_dur: f64,
    pub fall_begin: f64,
    /// Column opacity keyframes `low; peak; low`.
    pub opacity_values: [f64; 3],
    pub opacity_dur: f64,
    pub opacity_begin: f64,
    pub glyphs: &'static [Glyph],
}

/// Asymmetric placement record used by irregular columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IrregularSlot {
    /// Horizontal offset in authoring units; normalized against the table's range.
    pub offset: f64,
    /// Seconds added to the fall begin (and `0.65x` to the opacity begin).
    pub phase_shift: f64,
    /// Multiplier applied to the fall duration.
    pub fall_scale: f64,
    /// Multiplier applied to the opacity duration.
    pub opacity_scale: f64,
}

#[cfg(test)]
#[path = "../tests/unit/library.rs"]
mod tests;
