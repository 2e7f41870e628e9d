//! Column placement: evenly spaced regular columns plus table-driven irregular ones,
//! renormalized onto a span derived from the requested column count.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    layout::glyphs::generate_glyph_sequence,
    library::{BASE_COLUMNS, ColumnTemplate, Glyph, IRREGULAR_SLOTS},
};

/// Width used when the span would otherwise be narrower, and the empty-layout fallback.
pub const BASE_CANVAS_WIDTH: f64 = 500.0;
/// Fixed document height.
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const EDGE_MARGIN: f64 = 0.0;
pub const MIN_SPAN_WIDTH: f64 = BASE_CANVAS_WIDTH - 2.0 * EDGE_MARGIN;
/// Horizontal distance budgeted per column when sizing the span.
pub const COLUMN_SPACING: f64 = 42.0;
/// Seed for glyph-count sampling; fixed so repeated runs match byte for byte.
pub const GLYPH_COUNT_SEED: u64 = 0xC0FFEE;

/// Requested column population and glyphs-per-strand range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnRequest {
    pub gps_min: usize,
    pub gps_max: usize,
    pub regular: usize,
    pub irregular: usize,
}

impl ColumnRequest {
    /// `gps_min` is at least 1 and `gps_max` at least `gps_min`.
    pub fn normalized(self) -> Self {
        let gps_min = self.gps_min.max(1);
        Self {
            gps_min,
            gps_max: self.gps_max.max(gps_min),
            ..self
        }
    }

    pub fn total(&self) -> usize {
        self.regular + self.irregular
    }
}

impl Default for ColumnRequest {
    fn default() -> Self {
        Self {
            gps_min: 22,
            gps_max: 22,
            regular: BASE_COLUMNS.len(),
            irregular: BASE_COLUMNS.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ColumnKind {
    Regular,
    /// Placed from `IRREGULAR_SLOTS[slot]`.
    Irregular { slot: usize },
}

/// A generated column: an owned, mutated copy of a base template.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColumnInstance {
    pub kind: ColumnKind,
    /// Glyph-sequence seed; irregular seeds start after the regular ones.
    pub seed: usize,
    /// Final horizontal position (after renormalization and margin).
    pub x: f64,
    pub fall_from: f64,
    pub fall_to: f64,
    pub fall_dur: f64,
    pub fall_begin: f64,
    pub opacity_values: [f64; 3],
    pub opacity_dur: f64,
    pub opacity_begin: f64,
    pub glyphs: Vec<Glyph>,
}

impl ColumnInstance {
    fn from_template(template: &ColumnTemplate, kind: ColumnKind, seed: usize) -> Self {
        Self {
            kind,
            seed,
            x: template.x,
            fall_from: template.fall_from,
            fall_to: template.fall_to,
            fall_dur: template.fall_dur,
            fall_begin: template.fall_begin,
            opacity_values: template.opacity_values,
            opacity_dur: template.opacity_dur,
            opacity_begin: template.opacity_begin,
            glyphs: template.glyphs.to_vec(),
        }
    }

    pub fn peak_opacity(&self) -> f64 {
        self.opacity_values[1]
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColumnLayout {
    pub columns: Vec<ColumnInstance>,
    /// Span the x positions were renormalized onto.
    pub span_width: f64,
    pub canvas_width: f64,
}

/// `max(MIN_SPAN_WIDTH, (total - 1) * COLUMN_SPACING)`, with `total` floored at 1.
pub fn span_width(total_columns: usize) -> f64 {
    let total = total_columns.max(1);
    MIN_SPAN_WIDTH.max((total - 1) as f64 * COLUMN_SPACING)
}

struct GlyphCountSampler {
    rng: ChaCha8Rng,
    min: usize,
    max: usize,
}

impl GlyphCountSampler {
    fn new(min: usize, max: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(GLYPH_COUNT_SEED),
            min,
            max,
        }
    }

    // Fixed ranges never touch the generator.
    fn next(&mut self) -> usize {
        if self.min == self.max {
            return self.min;
        }
        self.rng.gen_range(self.min..=self.max)
    }
}

/// Place all columns and compute the canvas width.
#[tracing::instrument]
pub fn build_columns(request: &ColumnRequest) -> ColumnLayout {
    let request = request.normalized();
    let span = span_width(request.total());
    let mut sampler = GlyphCountSampler::new(request.gps_min, request.gps_max);
    let mut columns = Vec::with_capacity(request.total());

    for idx in 0..request.regular {
        let template = &BASE_COLUMNS[idx % BASE_COLUMNS.len()];
        let mut column = ColumnInstance::from_template(template, ColumnKind::Regular, idx);
        column.x = if request.regular == 1 {
            span / 2.0
        } else {
            (span / (request.regular - 1) as f64) * idx as f64
        };
        column.glyphs = generate_glyph_sequence(idx, template.glyphs, sampler.next());
        columns.push(column);
    }

    let (offset_min, offset_max) = offset_range();
    let slots = select_irregular_indices(request.irregular, IRREGULAR_SLOTS.len());
    for (idx, slot_idx) in slots.into_iter().enumerate() {
        let template = &BASE_COLUMNS[idx % BASE_COLUMNS.len()];
        let slot = &IRREGULAR_SLOTS[slot_idx];
        let seed = idx + request.regular;
        let mut column =
            ColumnInstance::from_template(template, ColumnKind::Irregular { slot: slot_idx }, seed);

        let normalized = if offset_max == offset_min {
            0.5
        } else {
            (slot.offset - offset_min) / (offset_max - offset_min)
        };
        column.x = normalized * span;
        column.fall_begin += slot.phase_shift;
        column.opacity_begin += slot.phase_shift * 0.65;
        column.fall_dur *= slot.fall_scale;
        column.opacity_dur *= slot.opacity_scale;
        column.glyphs = generate_glyph_sequence(seed, template.glyphs, sampler.next());
        columns.push(column);
    }

    let canvas_width = if columns.is_empty() {
        BASE_CANVAS_WIDTH
    } else {
        renormalize_positions(&mut columns, span);
        span + 2.0 * EDGE_MARGIN
    };

    tracing::debug!(
        regular = request.regular,
        irregular = request.irregular,
        canvas_width,
        "built column layout"
    );

    ColumnLayout {
        columns,
        span_width: span,
        canvas_width,
    }
}

fn offset_range() -> (f64, f64) {
    IRREGULAR_SLOTS
        .iter()
        .map(|s| s.offset)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 1.0))
}

/// Map the observed x range onto `[0, span]` (all-equal collapses to the midpoint),
/// then shift by the edge margin.
fn renormalize_positions(columns: &mut [ColumnInstance], span: f64) {
    let min_x = columns.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
    let max_x = columns.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);

    if max_x == min_x {
        for column in columns.iter_mut() {
            column.x = span / 2.0 + EDGE_MARGIN;
        }
        return;
    }

    let scale = span / (max_x - min_x);
    for column in columns.iter_mut() {
        column.x = (column.x - min_x) * scale + EDGE_MARGIN;
    }
}

/// Pick `count` slots from a table of `table_len` irregular offsets.
///
/// Up to `table_len`, slots are spread evenly (rounded half to even) and returned sorted.
/// A colliding slot probes upward to the last slot, then downward, then wraps forward.
/// Beyond `table_len`, whole table passes repeat with the start rotated by `3 * pass`.
pub fn select_irregular_indices(count: usize, table_len: usize) -> Vec<usize> {
    if count == 0 || table_len == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![table_len / 2];
    }

    if count <= table_len {
        let step = (table_len - 1) as f64 / (count - 1) as f64;
        let mut used = BTreeSet::new();
        let mut indices = Vec::with_capacity(count);
        for i in 0..count {
            let mut idx = ((i as f64 * step).round_ties_even() as usize).min(table_len - 1);
            while used.contains(&idx) && idx < table_len - 1 {
                idx += 1;
            }
            if used.contains(&idx) {
                match (0..idx).rev().find(|c| !used.contains(c)) {
                    Some(free) => idx = free,
                    None => {
                        idx = (idx + 1) % table_len;
                        while used.contains(&idx) {
                            idx = (idx + 1) % table_len;
                        }
                    }
                }
            }
            used.insert(idx);
            indices.push(idx);
        }
        indices.sort_unstable();
        return indices;
    }

    let mut indices = Vec::with_capacity(count);
    for pass in 0..count.div_ceil(table_len) {
        let offset = (pass * 3) % table_len;
        for pos in 0..table_len {
            indices.push((pos + offset) % table_len);
            if indices.len() == count {
                return indices;
            }
        }
    }
    indices
}

#[cfg(test)]
#[path = "../../tests/unit/layout/columns.rs"]
mod tests;
