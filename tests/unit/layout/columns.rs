use super::*;

fn request(gps_min: usize, gps_max: usize, regular: usize, irregular: usize) -> ColumnRequest {
    ColumnRequest {
        gps_min,
        gps_max,
        regular,
        irregular,
    }
}

fn xs(layout: &ColumnLayout) -> Vec<f64> {
    layout.columns.iter().map(|c| c.x).collect()
}

#[test]
fn default_layout_matches_documented_shape() {
    let layout = build_columns(&ColumnRequest::default());
    assert_eq!(layout.columns.len(), 24);
    assert_eq!(layout.span_width, 966.0);
    assert_eq!(layout.canvas_width, 966.0 + 2.0 * EDGE_MARGIN);
    assert!(layout.columns.iter().all(|c| c.glyphs.len() == 22));

    let min = xs(&layout).into_iter().fold(f64::INFINITY, f64::min);
    let max = xs(&layout).into_iter().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, EDGE_MARGIN);
    assert!((max - (966.0 + EDGE_MARGIN)).abs() < 1e-9);
}

#[test]
fn span_never_drops_below_minimum() {
    assert_eq!(span_width(0), MIN_SPAN_WIDTH);
    assert_eq!(span_width(1), MIN_SPAN_WIDTH);
    assert_eq!(span_width(12), MIN_SPAN_WIDTH);
    assert_eq!(span_width(13), MIN_SPAN_WIDTH.max(12.0 * COLUMN_SPACING));
    assert_eq!(span_width(40), 39.0 * COLUMN_SPACING);
}

#[test]
fn single_regular_column_sits_at_midpoint() {
    let layout = build_columns(&request(22, 22, 1, 0));
    assert_eq!(layout.columns.len(), 1);
    assert_eq!(layout.columns[0].x, MIN_SPAN_WIDTH / 2.0 + EDGE_MARGIN);
    assert_eq!(layout.canvas_width, MIN_SPAN_WIDTH + 2.0 * EDGE_MARGIN);
}

#[test]
fn empty_request_falls_back_to_base_width() {
    let layout = build_columns(&request(22, 22, 0, 0));
    assert!(layout.columns.is_empty());
    assert_eq!(layout.canvas_width, BASE_CANVAS_WIDTH);
}

#[test]
fn regular_columns_are_evenly_spaced() {
    let layout = build_columns(&request(5, 5, 5, 0));
    let positions = xs(&layout);
    assert_eq!(positions, vec![0.0, 125.0, 250.0, 375.0, 500.0]);
    assert!(layout.columns.iter().all(|c| c.kind == ColumnKind::Regular));
    assert_eq!(
        layout.columns.iter().map(|c| c.seed).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );
}

#[test]
fn irregular_columns_perturb_timing_from_their_slot() {
    let layout = build_columns(&request(11, 11, 0, 1));
    let col = &layout.columns[0];
    let base = &BASE_COLUMNS[0];
    let slot = &IRREGULAR_SLOTS[6];

    assert_eq!(col.kind, ColumnKind::Irregular { slot: 6 });
    assert_eq!(col.seed, 0);
    assert_eq!(col.fall_begin, base.fall_begin + slot.phase_shift);
    assert_eq!(col.opacity_begin, base.opacity_begin + slot.phase_shift * 0.65);
    assert_eq!(col.fall_dur, base.fall_dur * slot.fall_scale);
    assert_eq!(col.opacity_dur, base.opacity_dur * slot.opacity_scale);
    // lone column collapses to the midpoint after renormalization
    assert_eq!(col.x, MIN_SPAN_WIDTH / 2.0 + EDGE_MARGIN);
}

#[test]
fn irregular_seeds_follow_regular_seeds() {
    let layout = build_columns(&request(22, 22, 3, 2));
    let seeds: Vec<usize> = layout.columns.iter().map(|c| c.seed).collect();
    assert_eq!(seeds, vec![0, 1, 2, 3, 4]);
}

#[test]
fn irregular_positions_renormalize_onto_the_span() {
    let layout = build_columns(&request(22, 22, 0, 3));
    let positions = xs(&layout);
    let inner = (IRREGULAR_SLOTS[6].offset - IRREGULAR_SLOTS[0].offset)
        / (IRREGULAR_SLOTS[11].offset - IRREGULAR_SLOTS[0].offset)
        * MIN_SPAN_WIDTH;
    assert_eq!(positions[0], EDGE_MARGIN);
    assert!((positions[1] - (inner + EDGE_MARGIN)).abs() < 1e-9);
    assert!((positions[2] - (MIN_SPAN_WIDTH + EDGE_MARGIN)).abs() < 1e-9);
}

#[test]
fn templates_are_cloned_round_robin() {
    let layout = build_columns(&request(3, 3, 14, 0));
    assert_eq!(layout.columns[12].fall_dur, BASE_COLUMNS[0].fall_dur);
    assert_eq!(layout.columns[13].fall_dur, BASE_COLUMNS[1].fall_dur);
    assert_eq!(layout.columns[12].glyphs.as_slice(), &BASE_COLUMNS[0].glyphs[..3]);
}

#[test]
fn layout_is_deterministic_with_sampled_counts() {
    let req = request(10, 30, 12, 12);
    let a = build_columns(&req);
    let b = build_columns(&req);
    assert_eq!(a, b);

    let counts: Vec<usize> = a.columns.iter().map(|c| c.glyphs.len()).collect();
    assert!(counts.iter().all(|n| (10..=30).contains(n)));
    assert!(counts.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn inverted_glyph_bounds_are_raised() {
    let layout = build_columns(&request(0, 0, 2, 0));
    assert!(layout.columns.iter().all(|c| c.glyphs.len() == 1));

    let layout = build_columns(&request(15, 4, 2, 0));
    assert!(layout.columns.iter().all(|c| c.glyphs.len() == 15));
}

#[test]
fn index_selection_small_counts() {
    assert!(select_irregular_indices(0, 12).is_empty());
    assert!(select_irregular_indices(5, 0).is_empty());
    assert_eq!(select_irregular_indices(1, 12), vec![6]);
    assert_eq!(select_irregular_indices(2, 12), vec![0, 11]);
    assert_eq!(select_irregular_indices(3, 12), vec![0, 6, 11]);
    assert_eq!(select_irregular_indices(5, 12), vec![0, 3, 6, 8, 11]);
    assert_eq!(select_irregular_indices(12, 12), (0..12).collect::<Vec<_>>());
}

#[test]
fn index_selection_is_unique_up_to_table_size() {
    for count in 1..=12 {
        let indices = select_irregular_indices(count, 12);
        assert_eq!(indices.len(), count);
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "count {count}");
    }
}

#[test]
fn index_selection_rotates_extra_passes() {
    let indices = select_irregular_indices(26, 12);
    assert_eq!(indices.len(), 26);
    assert_eq!(&indices[..12], (0..12).collect::<Vec<_>>().as_slice());
    assert_eq!(indices[12], 3);
    assert_eq!(indices[23], 2);
    assert_eq!(&indices[24..], &[6, 7]);
}
