use super::{ColumnTemplate, Glyph};

const fn g(text: &'static str, size: u32) -> Glyph {
    Glyph::new(text, size)
}

const fn column(
    x: f64,
    fall: (f64, f64),
    fall_dur: f64,
    fall_begin: f64,
    opacity_values: [f64; 3],
    glyphs: &'static [Glyph],
) -> ColumnTemplate {
    // Authoring data keeps fall and opacity on the same clock.
    ColumnTemplate {
        x,
        fall_from: fall.0,
        fall_to: fall.1,
        fall_dur,
        fall_begin,
        opacity_values,
        opacity_dur: fall_dur,
        opacity_begin: fall_begin,
        glyphs,
    }
}

#[rustfmt::skip]
pub const BASE_COLUMNS: [ColumnTemplate; 12] = [
    column(
        20.0,
        (-260.0, 540.0),
        4.2,
        -1.4,
        [0.2, 0.95, 0.2],
        &[
            g("A", 18), g("Σ", 20), g("7", 21), g("Ω", 19), g("Ñ", 18), g("@", 21),
            g("Z", 23), g("É", 19), g("?", 18), g("δ", 17), g("∞", 20),
        ],
    ),
    column(
        60.0,
        (-300.0, 520.0),
        5.1,
        -0.8,
        [0.18, 1.0, 0.18],
        &[
            g("ß", 18), g("M", 21), g("鶴", 22), g("λ", 19), g("Ü", 18), g("鶴", 20),
            g("Q", 23), g("ß", 19), g("3", 18), g("η", 17), g("≈", 20),
        ],
    ),
    column(
        100.0,
        (-240.0, 520.0),
        4.7,
        -2.3,
        [0.25, 0.9, 0.25],
        &[
            g("C", 18), g("S", 20), g("%", 22), g("Ψ", 19), g("Í", 17), g("5", 21),
            g("T", 23), g("χ", 19), g("8", 18), g("κ", 17), g("∈", 20),
        ],
    ),
    column(
        140.0,
        (-320.0, 520.0),
        5.4,
        -0.4,
        [0.18, 0.92, 0.18],
        &[
            g("D", 18), g("L", 21), g("$", 22), g("β", 19), g("Ó", 17), g("1", 21),
            g("P", 23), g("Ξ", 19), g("6", 18), g("ϑ", 17), g("∮", 20),
        ],
    ),
    column(
        180.0,
        (-260.0, 560.0),
        4.1,
        -1.9,
        [0.26, 0.9, 0.26],
        &[
            g("E", 18), g("V", 21), g("0", 22), g("Γ", 19), g("Ú", 17), g("2", 21),
            g("F", 23), g("Ζ", 19), g("4", 18), g("θ", 17), g("∟", 20),
        ],
    ),
    column(
        220.0,
        (-300.0, 560.0),
        5.8,
        -3.2,
        [0.17, 0.95, 0.17],
        &[
            g("F", 18), g("X", 21), g("!", 22), g("Φ", 19), g("Å", 17), g("%", 21),
            g("N", 23), g("Π", 19), g("œ", 18), g("μ", 17), g("∴", 20),
        ],
    ),
    column(
        260.0,
        (-260.0, 520.0),
        4.4,
        -0.2,
        [0.24, 0.93, 0.24],
        &[
            g("G", 18), g("Y", 21), g("@", 22), g("Υ", 19), g("Í", 17), g("ρ", 21),
            g("Æ", 23), g("W", 19), g("ħ", 18), g("ξ", 17), g("∠", 20),
        ],
    ),
    column(
        300.0,
        (-280.0, 560.0),
        5.0,
        -1.1,
        [0.2, 0.97, 0.2],
        &[
            g("ñ", 18), g("T", 21), g("8", 22), g("ϖ", 19), g("Ê", 17), g("σ", 21),
            g("Ğ", 23), g("V", 19), g("ň", 18), g("ς", 17), g("∵", 20),
        ],
    ),
    column(
        340.0,
        (-240.0, 520.0),
        4.3,
        -2.7,
        [0.22, 0.92, 0.22],
        &[
            g("I", 18), g("P", 21), g("6", 22), g("ϱ", 19), g("Ë", 17), g("ϙ", 21),
            g("Ð", 23), g("U", 19), g("ŕ", 18), g("Ϟ", 17), g("∗", 20),
        ],
    ),
    column(
        380.0,
        (-320.0, 560.0),
        5.6,
        -1.5,
        [0.19, 0.96, 0.19],
        &[
            g("¿", 18), g("N", 21), g("5", 22), g("ϗ", 19), g("Ę", 17), g("ϛ", 21),
            g("Ç", 23), g("R", 19), g("ś", 18), g("ϟ", 17), g("∯", 20),
        ],
    ),
    column(
        420.0,
        (-260.0, 520.0),
        4.5,
        -0.9,
        [0.24, 0.9, 0.24],
        &[
            g("K", 18), g("C", 21), g("4", 22), g("Ϥ", 19), g("Ě", 17), g("ϝ", 21),
            g("Ō", 23), g("S", 19), g("ž", 18), g("ϡ", 17), g("∼", 20),
        ],
    ),
    column(
        460.0,
        (-300.0, 560.0),
        5.2,
        -2.5,
        [0.21, 0.94, 0.21],
        &[
            g("ψ", 18), g("E", 21), g("3", 22), g("Θ", 19), g("Á", 17), g("Δ", 21),
            g("Š", 23), g("T", 19), g("ñ", 18), g("β", 17), g("⊕", 20),
        ],
    ),
];
