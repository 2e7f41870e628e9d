use super::Glyph;

/// Extension glyphs appended once a column's base list runs out.
pub const EXTRA_GLYPH_CYCLE: [Glyph; 17] = [
    Glyph::new("ß", 19),
    Glyph::new("ø", 20),
    Glyph::new("Σ", 22),
    Glyph::new("ñ", 18),
    Glyph::new("#", 19),
    Glyph::new("ξ", 18),
    Glyph::new("Þ", 21),
    Glyph::new("¡", 19),
    Glyph::new("ψ", 21),
    Glyph::new("Ł", 20),
    Glyph::new("¿", 19),
    Glyph::new("K", 21),
    Glyph::new("κ", 20),
    Glyph::new("Ϟ", 22),
    Glyph::new("2", 21),
    Glyph::new("0", 21),
    Glyph::new("Ω", 22),
];

// Signature glyphs prepended to the cycle for seeds divisible by 5, 7 and 11.
pub const K2_GLYPH: Glyph = Glyph::new("K2", 22);
pub const KTWO_GLYPH: Glyph = Glyph::new("ktwo", 20);
pub const ASSISTANT_GLYPH: Glyph = Glyph::new("∑AI", 20);
