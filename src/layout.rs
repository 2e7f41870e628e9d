pub mod columns;
pub mod glyphs;
