use crate::library::{ASSISTANT_GLYPH, EXTRA_GLYPH_CYCLE, Glyph, K2_GLYPH, KTWO_GLYPH};

/// Expand or truncate `base` to exactly `target` glyphs.
///
/// Short targets truncate. Longer targets keep every base glyph and then append from
/// the extension cycle, rotated by `(seed * 3) % len`, wrapping as needed. Seeds
/// divisible by 11, 5 or 7 get signature glyphs prepended to the cycle before rotation.
pub fn generate_glyph_sequence(seed: usize, base: &[Glyph], target: usize) -> Vec<Glyph> {
    if target == 0 {
        return Vec::new();
    }

    let mut glyphs: Vec<Glyph> = base.iter().take(target).copied().collect();
    if glyphs.len() == target {
        return glyphs;
    }

    let cycle = extension_cycle(seed);
    let rotation = (seed * 3) % cycle.len();
    glyphs.extend(
        cycle
            .iter()
            .cycle()
            .skip(rotation)
            .take(target - glyphs.len())
            .copied(),
    );
    glyphs
}

/// Extension cycle for `seed` before rotation.
///
/// The 11 check always runs; the 5 check shadows the 7 check. Each insertion goes to
/// the front, so a seed divisible by 55 starts `K2, ∑AI, ...`.
fn extension_cycle(seed: usize) -> Vec<Glyph> {
    let mut cycle = EXTRA_GLYPH_CYCLE.to_vec();
    if seed % 11 == 0 {
        cycle.insert(0, ASSISTANT_GLYPH);
    }
    if seed % 5 == 0 {
        cycle.insert(0, K2_GLYPH);
    } else if seed % 7 == 0 {
        cycle.insert(0, KTWO_GLYPH);
    }
    cycle
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyphs.rs"]
mod tests;
