//! Document assembly: metadata, style, definitions, backgrounds, the glyph layer and
//! the optional lightning overlay, in that order.

pub mod defs;
pub mod lightning;
pub mod metadata;
pub mod rain;
pub mod tree;

use crate::{
    animation::synth::synthesize,
    config::GenerateConfig,
    foundation::format::format_number,
    layout::columns::{CANVAS_HEIGHT, build_columns},
};

use self::{
    defs::{build_backgrounds, build_defs, build_style},
    lightning::build_lightning,
    metadata::{CC_NS, DC_NS, DEFAULT_WORK, RDF_NS, build_metadata},
    rain::build_rain,
    tree::Element,
};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An assembled document plus the figures it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Clamped quality level actually applied.
    pub level: u32,
    pub column_count: usize,
    pub glyph_count: usize,
}

impl Document {
    pub fn to_svg_string(&self) -> String {
        let mut out = self.root.to_string();
        out.push('\n');
        out
    }
}

/// Build the full document for `config`. Out-of-range knobs are clamped, never rejected.
#[tracing::instrument(skip(config), fields(nice = config.nice))]
pub fn build_document(config: &GenerateConfig) -> Document {
    let flags = config.quality();
    let layout = build_columns(&config.column_request());
    let columns = synthesize(&layout, &flags);
    let width = format_number(layout.canvas_width);

    let mut root = Element::new("svg").attr("xmlns", SVG_NS);
    if config.include_metadata {
        root = root
            .attr("xmlns:dc", DC_NS)
            .attr("xmlns:cc", CC_NS)
            .attr("xmlns:rdf", RDF_NS);
    }
    root = root
        .attr("width", width.as_str())
        .attr("height", format_number(CANVAS_HEIGHT))
        .attr(
            "viewBox",
            format!("0 0 {width} {}", format_number(CANVAS_HEIGHT)),
        )
        .attr("style", "width:100%;height:auto;")
        .attr("aria-label", "Animated neon glyph waterfall")
        .attr("role", "img")
        .attr("focusable", "true");

    if config.include_metadata {
        root.push(build_metadata(&DEFAULT_WORK));
    }
    root.push(build_style());
    root.push(build_defs());
    for rect in build_backgrounds(layout.canvas_width) {
        root.push(rect);
    }
    root.push(build_rain(&columns));
    if config.lightning_enabled() {
        root.push(build_lightning(layout.canvas_width));
    }

    let glyph_count = columns.iter().map(|c| c.glyphs.len()).sum();
    tracing::debug!(
        level = flags.level(),
        columns = columns.len(),
        glyph_count,
        canvas_width = layout.canvas_width,
        "assembled document"
    );

    Document {
        root,
        canvas_width: layout.canvas_width,
        canvas_height: CANVAS_HEIGHT,
        level: flags.level(),
        column_count: columns.len(),
        glyph_count,
    }
}

/// Convenience wrapper returning the serialized SVG text.
pub fn render_svg(config: &GenerateConfig) -> String {
    build_document(config).to_svg_string()
}

#[cfg(test)]
#[path = "../tests/unit/document/assemble.rs"]
mod tests;
