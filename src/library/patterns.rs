use super::Pattern;

pub const PATTERNS: [Pattern; 8] = [
    Pattern {
        fill_values: &[0.3, 0.95, 0.3],
        fill_dur: 2.6,
        fill_begin: -0.9,
        jitter_path: &[(0.0, -8.0), (0.0, 4.0), (0.0, -5.0), (0.0, -8.0)],
        jitter_dur: 3.4,
        jitter_begin: -0.5,
        size_dur: 4.0,
        size_begin: -1.1,
        size_high: 1.0,
        size_low: -1.0,
    },
    Pattern {
        fill_values: &[0.25, 0.88, 0.28, 0.25],
        fill_dur: 2.2,
        fill_begin: -1.6,
        jitter_path: &[(0.0, -6.0), (0.0, 2.0), (0.0, -4.0), (0.0, -6.0)],
        jitter_dur: 2.9,
        jitter_begin: -0.7,
        size_dur: 3.3,
        size_begin: -0.8,
        size_high: 1.2,
        size_low: -0.8,
    },
    Pattern {
        fill_values: &[0.2, 0.92, 0.2],
        fill_dur: 3.1,
        fill_begin: -0.4,
        jitter_path: &[(0.0, -10.0), (0.0, 5.0), (0.0, -3.0), (0.0, -10.0)],
        jitter_dur: 3.6,
        jitter_begin: -1.2,
        size_dur: 3.7,
        size_begin: -1.4,
        size_high: 0.8,
        size_low: -1.2,
    },
    Pattern {
        fill_values: &[0.34, 0.9, 0.34],
        fill_dur: 2.4,
        fill_begin: -1.2,
        jitter_path: &[(0.0, -7.0), (0.0, 3.0), (0.0, -6.0), (0.0, -7.0)],
        jitter_dur: 3.0,
        jitter_begin: -0.3,
        size_dur: 3.5,
        size_begin: -1.0,
        size_high: 1.0,
        size_low: -0.5,
    },
    Pattern {
        fill_values: &[0.18, 0.82, 0.24, 0.18],
        fill_dur: 4.8,
        fill_begin: -2.1,
        jitter_path: &[(0.0, -5.0), (0.0, 6.0), (0.0, -7.0), (0.0, -5.0)],
        jitter_dur: 6.3,
        jitter_begin: -1.8,
        size_dur: 4.9,
        size_begin: -2.2,
        size_high: 1.6,
        size_low: -1.3,
    },
    Pattern {
        fill_values: &[0.4, 1.0, 0.5, 0.4],
        fill_dur: 1.7,
        fill_begin: -0.65,
        jitter_path: &[(0.0, -14.0), (0.0, 3.0), (0.0, -9.0), (0.0, -14.0)],
        jitter_dur: 2.1,
        jitter_begin: -0.95,
        size_dur: 2.4,
        size_begin: -0.7,
        size_high: 0.6,
        size_low: -1.8,
    },
    Pattern {
        fill_values: &[0.22, 0.9, 0.3, 0.22],
        fill_dur: 5.6,
        fill_begin: -2.8,
        jitter_path: &[(0.0, -6.0), (0.0, 5.0), (0.0, -8.0), (0.0, -6.0)],
        jitter_dur: 6.8,
        jitter_begin: -2.4,
        size_dur: 5.4,
        size_begin: -2.6,
        size_high: 1.8,
        size_low: -1.5,
    },
    Pattern {
        fill_values: &[0.32, 0.96, 0.4, 0.32],
        fill_dur: 1.4,
        fill_begin: -0.35,
        jitter_path: &[(0.0, -18.0), (0.0, 8.0), (0.0, -11.0), (0.0, -18.0)],
        jitter_dur: 1.9,
        jitter_begin: -0.55,
        size_dur: 2.1,
        size_begin: -0.6,
        size_high: 0.9,
        size_low: -2.1,
    },
];
