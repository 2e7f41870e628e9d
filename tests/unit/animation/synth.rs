use super::*;
use crate::{
    layout::columns::{ColumnKind, ColumnRequest, build_columns},
    library::{BASE_COLUMNS, Glyph},
    quality::resolve_quality,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn single_column(glyphs: Vec<Glyph>, peak: f64) -> ColumnLayout {
    let base = &BASE_COLUMNS[0];
    ColumnLayout {
        columns: vec![ColumnInstance {
            kind: ColumnKind::Regular,
            seed: 0,
            x: 250.0,
            fall_from: base.fall_from,
            fall_to: base.fall_to,
            fall_dur: base.fall_dur,
            fall_begin: base.fall_begin,
            opacity_values: [0.2, peak, 0.2],
            opacity_dur: base.opacity_dur,
            opacity_begin: base.opacity_begin,
            glyphs,
        }],
        span_width: 500.0,
        canvas_width: 500.0,
    }
}

#[test]
fn phase_anchor_staggers_columns() {
    assert!(close(phase_anchor(0), -0.08));
    // 7 * 0.61803398875 = 4.32623792125
    let expected = 0.45 + 0.45 * 0.18 + (0.32623792125 - 0.5) * 0.16;
    assert!(close(phase_anchor(7), expected));
    assert!(phase_anchor(1) > phase_anchor(0));
}

#[test]
fn micro_phase_mixes_column_and_glyph() {
    assert!(close(micro_phase(0, 0), 0.0));
    assert!(close(micro_phase(2, 3), (0.36 + 0.21) * 0.6));
}

#[test]
fn patterns_rotate_with_column_and_glyph() {
    assert_eq!(pattern_index(0, 0), 0);
    assert_eq!(pattern_index(3, 4), 7);
    assert_eq!(pattern_index(5, 5), 2);
}

#[test]
fn peak_opacity_nudges_and_clamps() {
    assert!(close(peak_opacity(0.95, 0), 0.95 * 0.92));
    assert!(close(peak_opacity(0.95, 1), 0.95));
    assert!(close(peak_opacity(0.9, 2), 0.9 * 1.08));
    assert_eq!(peak_opacity(1.0, 2), 0.98);
    assert_eq!(peak_opacity(0.2, 1), 0.4);
}

#[test]
fn size_scale_never_inverts() {
    assert!(close(size_scale(20, 1.0), 1.05));
    assert_eq!(size_scale(1, -2.1), 0.2);
    assert_eq!(size_scale(0, 5.0), 1.0);
}

#[test]
fn first_glyph_of_first_column() {
    let layout = build_columns(&ColumnRequest::default());
    let columns = synthesize(&layout, &resolve_quality(0));
    let glyph = &columns[0].glyphs[0];
    let base = &BASE_COLUMNS[0];

    assert_eq!(glyph.text, "A");
    assert_eq!(glyph.font_size, 18);
    assert_eq!(glyph.base_y, FIRST_BASELINE);
    assert_eq!(glyph.pattern_index, 0);
    assert_eq!(glyph.start_translation, base.fall_from);
    assert!(close(glyph.fall.dur, base.fall_dur * 0.95 * VERTICAL_SPEED_FACTOR));
    assert!(close(glyph.fall.begin, base.fall_begin - 0.08));
    assert_eq!(glyph.fall.values.to_attr(), "0,-260;0,540");

    let opacity = glyph.opacity.timeline().unwrap();
    assert!(close(opacity.dur, base.opacity_dur * 0.9));
    assert_eq!(opacity.values.to_attr(), "0.08;0.87;0.06");

    let fill = glyph.fill_opacity.timeline().unwrap();
    assert_eq!(fill.values.to_attr(), "0.3;0.95;0.3");
    assert!(close(fill.begin, PATTERNS[0].fill_begin - 0.08));

    let size = glyph.size_pulse.as_ref().unwrap();
    assert_eq!(size.values.to_attr(), "1;1.06;0.94;1");
    let jitter = glyph.jitter.as_ref().unwrap();
    assert_eq!(jitter.values.to_attr(), "0,-8;0,4;0,-5;0,-8");
}

#[test]
fn glyph_baselines_step_by_line_height() {
    let layout = single_column(BASE_COLUMNS[0].glyphs.to_vec(), 0.95);
    let columns = synthesize(&layout, &resolve_quality(0));
    for (idx, glyph) in columns[0].glyphs.iter().enumerate() {
        assert_eq!(glyph.base_y, FIRST_BASELINE + idx as f64 * LINE_HEIGHT);
    }
}

#[test]
fn micro_phase_weights_differ_per_timeline() {
    let layout = build_columns(&ColumnRequest::default());
    let columns = synthesize(&layout, &resolve_quality(0));
    let (c, g) = (3, 5);
    let glyph = &columns[c].glyphs[g];
    let pattern = &PATTERNS[pattern_index(c, g)];
    let anchor = phase_anchor(c);
    let micro = micro_phase(c, g);

    assert!(close(
        glyph.jitter.as_ref().unwrap().begin,
        pattern.jitter_begin + anchor - micro * 0.8
    ));
    assert!(close(
        glyph.size_pulse.as_ref().unwrap().begin,
        pattern.size_begin + anchor - micro * 0.5
    ));
    assert!(close(
        glyph.opacity.timeline().unwrap().begin,
        layout.columns[c].opacity_begin + anchor - micro * 0.6
    ));
    assert!(close(
        glyph.fall.begin,
        layout.columns[c].fall_begin + anchor - micro
    ));
}

#[test]
fn max_level_pins_everything_static() {
    let layout = build_columns(&ColumnRequest::default());
    let columns = synthesize(&layout, &resolve_quality(6));
    for column in &columns {
        assert!(!column.trail_filter);
        for glyph in &column.glyphs {
            let pattern = &PATTERNS[glyph.pattern_index];
            assert!(glyph.size_pulse.is_none());
            assert!(glyph.jitter.is_none());
            let mean = pattern.fill_values.iter().sum::<f64>() / pattern.fill_values.len() as f64;
            assert!(matches!(glyph.fill_opacity, Channel::Static(v) if close(v, mean)));
            assert!(matches!(glyph.opacity, Channel::Static(v) if (0.4..=0.98).contains(&v)));
        }
    }
}

#[test]
fn intermediate_levels_gate_progressively() {
    let layout = single_column(BASE_COLUMNS[0].glyphs.to_vec(), 0.95);

    let lvl1 = synthesize(&layout, &resolve_quality(1));
    assert!(lvl1[0].glyphs[0].size_pulse.is_none());
    assert!(lvl1[0].glyphs[0].jitter.is_some());

    let lvl3 = synthesize(&layout, &resolve_quality(3));
    assert!(lvl3[0].glyphs[0].opacity.static_value().is_some());
    assert!(lvl3[0].glyphs[0].fill_opacity.timeline().is_some());

    let lvl4 = synthesize(&layout, &resolve_quality(4));
    assert!(lvl4[0].trail_filter);
    assert!(lvl4[0].glyphs[0].fill_opacity.static_value().is_some());

    let lvl5 = synthesize(&layout, &resolve_quality(5));
    assert!(!lvl5[0].trail_filter);
}

#[test]
fn synthesis_is_deterministic() {
    let layout = build_columns(&ColumnRequest {
        gps_min: 8,
        gps_max: 30,
        regular: 9,
        irregular: 15,
    });
    let flags = resolve_quality(0);
    assert_eq!(synthesize(&layout, &flags), synthesize(&layout, &flags));
}
