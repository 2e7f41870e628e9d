//! Per-glyph animation parameters.
//!
//! Every glyph shares one of a handful of [`Pattern`]s, so timing curves repeat. Two
//! deterministic offsets keep that repetition from lining up on screen:
//!
//! - the column *phase anchor*, a staggered wave over groups of six columns with a
//!   golden-ratio jitter on top, and
//! - the *micro phase*, a small per-column/per-glyph drift subtracted (at different
//!   weights) from each timeline's begin.

use crate::{
    animation::timeline::{Channel, Timeline},
    layout::columns::{ColumnInstance, ColumnLayout},
    library::{PATTERNS, Pattern},
    quality::{QualityFeature, QualityFlags},
};

/// Global multiplier on every fall duration.
pub const VERTICAL_SPEED_FACTOR: f64 = 1.45;

pub const COLUMN_WAVE_GROUP: usize = 6;
pub const COLUMN_PHASE_STEP: f64 = 0.45;
pub const COLUMN_SECONDARY_FACTOR: f64 = 0.18;
pub const COLUMN_RANDOM_JITTER: f64 = 0.16;
pub const MICRO_PHASE_SCALE: f64 = 0.6;
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.61803398875;

/// Baseline of the first glyph in a column.
pub const FIRST_BASELINE: f64 = 20.0;
/// Vertical distance between consecutive glyph baselines.
pub const LINE_HEIGHT: f64 = 40.0;

const GLYPH_OPACITY_HEAD: f64 = 0.08;
const GLYPH_OPACITY_TAIL: f64 = 0.06;
const PEAK_OPACITY_MIN: f64 = 0.4;
const PEAK_OPACITY_MAX: f64 = 0.98;
const MIN_SIZE_SCALE: f64 = 0.2;

// Micro-phase weights per timeline.
const FALL_MICRO_WEIGHT: f64 = 1.0;
const JITTER_MICRO_WEIGHT: f64 = 0.8;
const SIZE_MICRO_WEIGHT: f64 = 0.5;
const OPACITY_MICRO_WEIGHT: f64 = 0.6;

/// Everything needed to emit one column group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColumnAnimation {
    pub x: f64,
    /// Whether the column carries the blur trail filter.
    pub trail_filter: bool,
    pub glyphs: Vec<GlyphAnimation>,
}

/// Resolved animation for a single glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphAnimation {
    pub text: &'static str,
    pub font_size: u32,
    /// Resting baseline before any translation.
    pub base_y: f64,
    pub pattern_index: usize,
    /// Vertical translation applied before the fall timeline starts.
    pub start_translation: f64,
    pub fall: Timeline,
    pub fill_opacity: Channel,
    pub opacity: Channel,
    pub size_pulse: Option<Timeline>,
    pub jitter: Option<Timeline>,
}

/// Column phase offset: `(c % 6) * 0.45 + (c / 6) * 0.45 * 0.18 + jitter`, where the
/// jitter is `(frac(c * φ⁻¹) - 0.5) * 0.16`.
pub fn phase_anchor(column_index: usize) -> f64 {
    let wave = (column_index % COLUMN_WAVE_GROUP) as f64 * COLUMN_PHASE_STEP;
    let secondary = (column_index / COLUMN_WAVE_GROUP) as f64
        * COLUMN_PHASE_STEP
        * COLUMN_SECONDARY_FACTOR;
    let jitter = ((column_index as f64 * GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0) - 0.5)
        * COLUMN_RANDOM_JITTER;
    wave + secondary + jitter
}

pub fn micro_phase(column_index: usize, glyph_index: usize) -> f64 {
    (column_index as f64 * 0.18 + glyph_index as f64 * 0.07) * MICRO_PHASE_SCALE
}

pub fn pattern_index(column_index: usize, glyph_index: usize) -> usize {
    (glyph_index + column_index) % PATTERNS.len()
}

/// Per-glyph fall duration multiplier.
pub fn fall_scale(glyph_index: usize, pattern_index: usize) -> f64 {
    0.95 + 0.08 * (glyph_index % 5) as f64 + 0.05 * (pattern_index % 3) as f64
}

/// Per-glyph opacity pulse duration multiplier.
pub fn opacity_scale(column_index: usize, glyph_index: usize) -> f64 {
    0.9 + 0.04 * ((glyph_index + 2 * column_index) % 4) as f64
}

/// Column peak opacity nudged by `±8%` in a 3-glyph rhythm, clamped to `[0.4, 0.98]`.
pub fn peak_opacity(column_peak: f64, glyph_index: usize) -> f64 {
    let nudge = 1.0 + 0.08 * ((glyph_index % 3) as f64 - 1.0);
    (column_peak * nudge).clamp(PEAK_OPACITY_MIN, PEAK_OPACITY_MAX)
}

/// `(size + delta) / size`, floored so the pulse never inverts the glyph.
pub fn size_scale(font_size: u32, delta: f64) -> f64 {
    if font_size == 0 {
        return 1.0;
    }
    let size = f64::from(font_size);
    ((size + delta) / size).max(MIN_SIZE_SCALE)
}

/// Derive animation parameters for every glyph of every column.
#[tracing::instrument(skip(layout), fields(columns = layout.columns.len()))]
pub fn synthesize(layout: &ColumnLayout, flags: &QualityFlags) -> Vec<ColumnAnimation> {
    let trail_filter = flags.is_enabled(QualityFeature::TrailFilter);
    let out: Vec<ColumnAnimation> = layout
        .columns
        .iter()
        .enumerate()
        .map(|(column_index, column)| ColumnAnimation {
            x: column.x,
            trail_filter,
            glyphs: synthesize_column(column_index, column, flags),
        })
        .collect();

    tracing::debug!(
        glyphs = out.iter().map(|c| c.glyphs.len()).sum::<usize>(),
        level = flags.level(),
        "synthesized glyph timelines"
    );
    out
}

fn synthesize_column(
    column_index: usize,
    column: &ColumnInstance,
    flags: &QualityFlags,
) -> Vec<GlyphAnimation> {
    let anchor = phase_anchor(column_index);
    column
        .glyphs
        .iter()
        .enumerate()
        .map(|(glyph_index, glyph)| {
            let pattern_index = pattern_index(column_index, glyph_index);
            let pattern = &PATTERNS[pattern_index];
            let micro = micro_phase(column_index, glyph_index);

            let fall = Timeline::points(
                vec![(0.0, column.fall_from), (0.0, column.fall_to)],
                column.fall_dur * fall_scale(glyph_index, pattern_index) * VERTICAL_SPEED_FACTOR,
                column.fall_begin + anchor - micro * FALL_MICRO_WEIGHT,
            );

            let peak = peak_opacity(column.peak_opacity(), glyph_index);
            let opacity = Channel::gated(
                flags,
                QualityFeature::PerGlyphOpacity,
                Timeline::scalars(
                    vec![GLYPH_OPACITY_HEAD, peak, GLYPH_OPACITY_TAIL],
                    column.opacity_dur * opacity_scale(column_index, glyph_index),
                    column.opacity_begin + anchor - micro * OPACITY_MICRO_WEIGHT,
                ),
                peak,
            );

            let fill = Timeline::scalars(
                pattern.fill_values.to_vec(),
                pattern.fill_dur,
                pattern.fill_begin + anchor - micro,
            );
            let fill_mean = fill.values.mean().unwrap_or(1.0);
            let fill_opacity =
                Channel::gated(flags, QualityFeature::FillOpacityPulse, fill, fill_mean);

            GlyphAnimation {
                text: glyph.text,
                font_size: glyph.size,
                base_y: FIRST_BASELINE + glyph_index as f64 * LINE_HEIGHT,
                pattern_index,
                start_translation: column.fall_from,
                fall,
                fill_opacity,
                opacity,
                size_pulse: size_pulse(pattern, glyph.size, anchor, micro)
                    .gated(flags, QualityFeature::FontSizeAnimation),
                jitter: Timeline::points(
                    pattern.jitter_path.to_vec(),
                    pattern.jitter_dur,
                    pattern.jitter_begin + anchor - micro * JITTER_MICRO_WEIGHT,
                )
                .gated(flags, QualityFeature::MicroJitter),
            }
        })
        .collect()
}

fn size_pulse(pattern: &Pattern, font_size: u32, anchor: f64, micro: f64) -> Timeline {
    Timeline::scalars(
        vec![
            1.0,
            size_scale(font_size, pattern.size_high),
            size_scale(font_size, pattern.size_low),
            1.0,
        ],
        pattern.size_dur,
        pattern.size_begin + anchor - micro * SIZE_MICRO_WEIGHT,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/synth.rs"]
mod tests;
