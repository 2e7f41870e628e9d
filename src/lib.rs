//! Glyphfall generates a self-contained, animated "falling glyph" SVG.
//!
//! A handful of numeric knobs (column counts, glyphs per strand, a quality level) are
//! turned into a fully specified cascade:
//!
//! 1. **Layout**: [`build_columns`] places regular and irregular columns and sizes the canvas.
//! 2. **Synthesis**: [`synthesize`] derives every glyph's fall, opacity, fill, size and
//!    jitter timelines, gated by the [`QualityFlags`] from [`resolve_quality`].
//! 3. **Assembly**: [`build_document`] wraps the glyph layer with metadata, filters,
//!    backgrounds and the lightning overlay.
//!
//! The whole pipeline is deterministic: identical inputs produce byte-identical output.
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod document;
pub mod foundation;
pub mod layout;
pub mod library;
pub mod preview;
pub mod quality;

pub use animation::synth::{
    ColumnAnimation, GlyphAnimation, micro_phase, phase_anchor, synthesize,
};
pub use animation::timeline::{Channel, Keyframes, Timeline};
pub use config::GenerateConfig;
pub use document::{Document, build_document, render_svg, tree::Element};
pub use foundation::error::{GlyphfallError, GlyphfallResult};
pub use foundation::format::format_number;
pub use layout::columns::{
    BASE_CANVAS_WIDTH, CANVAS_HEIGHT, ColumnInstance, ColumnKind, ColumnLayout, ColumnRequest,
    build_columns, select_irregular_indices,
};
pub use layout::glyphs::generate_glyph_sequence;
pub use library::Glyph;
pub use preview::{PreviewFrame, PreviewOpts, rasterize, write_png};
pub use quality::{MAX_QUALITY_LEVEL, QualityFeature, QualityFlags, resolve_quality};
