//! The glyph cascade layer.

use crate::{
    animation::{
        synth::{ColumnAnimation, GlyphAnimation},
        timeline::{Channel, Timeline},
    },
    document::tree::Element,
    foundation::format::format_number,
};

pub const RAIN_GROUP_ID: &str = "matrixRain";

fn timeline_element(name: &str, attribute: &str, timeline: &Timeline) -> Element {
    Element::new(name)
        .attr("attributeName", attribute)
        .attr("values", timeline.values.to_attr())
        .attr("dur", timeline.dur_attr())
        .attr("begin", timeline.begin_attr())
        .attr("repeatCount", "indefinite")
}

fn transform_element(kind: &str, timeline: &Timeline) -> Element {
    Element::new("animateTransform")
        .attr("attributeName", "transform")
        .attr("type", kind)
        .attr("values", timeline.values.to_attr())
        .attr("dur", timeline.dur_attr())
        .attr("begin", timeline.begin_attr())
        .attr("repeatCount", "indefinite")
}

fn glyph_element(glyph: &GlyphAnimation) -> Element {
    let mut text = Element::new("text")
        .attr("x", "0")
        .attr("y", format_number(glyph.base_y))
        .attr("fill", "url(#gradGlow)")
        .attr("font-size", glyph.font_size.to_string())
        .attr(
            "transform",
            format!("translate(0,{})", format_number(glyph.start_translation)),
        );

    // Static fallbacks replace their animation element.
    if let Channel::Static(v) = glyph.opacity {
        text.set_attr("opacity", format_number(v));
    }
    if let Channel::Static(v) = glyph.fill_opacity {
        text.set_attr("fill-opacity", format_number(v));
    }

    text = text
        .text(glyph.text)
        .child(transform_element("translate", &glyph.fall));

    if let Channel::Animated(t) = &glyph.fill_opacity {
        text.push(timeline_element("animate", "fill-opacity", t));
    }
    if let Channel::Animated(t) = &glyph.opacity {
        text.push(timeline_element("animate", "opacity", t));
    }
    if let Some(t) = &glyph.size_pulse {
        text.push(transform_element("scale", t).attr("additive", "sum"));
    }
    if let Some(t) = &glyph.jitter {
        text.push(transform_element("translate", t).attr("additive", "sum"));
    }
    text
}

fn column_element(column: &ColumnAnimation) -> Element {
    let mut inner = Element::new("g");
    if column.trail_filter {
        inner.set_attr("filter", "url(#trailGlow)");
    }
    for glyph in &column.glyphs {
        inner.push(glyph_element(glyph));
    }

    Element::new("g")
        .attr("transform", format!("translate({},0)", format_number(column.x)))
        .child(inner)
}

pub fn build_rain(columns: &[ColumnAnimation]) -> Element {
    columns.iter().fold(
        Element::new("g")
            .attr("id", RAIN_GROUP_ID)
            .attr("opacity", "0.95")
            .attr("font-family", "system-ui, sans-serif")
            .attr("letter-spacing", "2"),
        |group, column| group.child(column_element(column)),
    )
}
