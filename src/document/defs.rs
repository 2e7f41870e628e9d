//! Static document furniture: style rules, gradient/filter definitions, backgrounds.

use crate::{
    document::tree::Element, foundation::format::format_number, layout::columns::CANVAS_HEIGHT,
};

const STYLE_TEXT: &str = "#matrixRain text {
  will-change: transform, opacity;
  transform-box: fill-box;
  transform-origin: center;
}";

const TRAIL_COLOR_MATRIX_VALUES: &str = "1 0 0 0 0
0 1 0 0 0
0 0 1 0 0
0 0 0 0.6 0";

pub const BACKGROUND_FILL: &str = "#050507";

pub fn build_style() -> Element {
    Element::new("style").text(format!("\n{STYLE_TEXT}\n"))
}

fn stop(offset: &str, color: &str) -> Element {
    Element::new("stop")
        .attr("offset", offset)
        .attr("stop-color", color)
}

fn vertical_gradient(id: &str, stops: [(&str, &str); 3]) -> Element {
    let mut gradient = Element::new("linearGradient")
        .attr("id", id)
        .attr("gradientUnits", "userSpaceOnUse")
        .attr("x1", "0")
        .attr("y1", "0")
        .attr("x2", "0")
        .attr("y2", format_number(CANVAS_HEIGHT));
    for (offset, color) in stops {
        gradient.push(stop(offset, color));
    }
    gradient
}

fn merge(inputs: &[&str]) -> Element {
    inputs.iter().fold(Element::new("feMerge"), |m, input| {
        m.child(Element::new("feMergeNode").attr("in", *input))
    })
}

pub fn build_defs() -> Element {
    let glow = vertical_gradient(
        "gradGlow",
        [("0%", "#9AFF9A"), ("60%", "#31FF6B"), ("100%", "#00BF47")],
    );
    let bolt = vertical_gradient(
        "gradBolt",
        [("0%", "#FFB347"), ("60%", "#FF6A00"), ("100%", "#FF2400")],
    );

    let soft_glow = Element::new("filter")
        .attr("id", "softGlow")
        .attr("x", "-40%")
        .attr("y", "-40%")
        .attr("width", "180%")
        .attr("height", "180%")
        .child(
            Element::new("feGaussianBlur")
                .attr("stdDeviation", "2.2")
                .attr("result", "blur"),
        )
        .child(merge(&["blur", "SourceGraphic"]));

    // Vertical-only blur faded through the alpha row gives the falling trail.
    let trail_glow = Element::new("filter")
        .attr("id", "trailGlow")
        .attr("x", "-40%")
        .attr("y", "-40%")
        .attr("width", "180%")
        .attr("height", "220%")
        .child(
            Element::new("feGaussianBlur")
                .attr("in", "SourceGraphic")
                .attr("stdDeviation", "0 7")
                .attr("result", "trail"),
        )
        .child(
            Element::new("feColorMatrix")
                .attr("in", "trail")
                .attr("type", "matrix")
                .attr("values", TRAIL_COLOR_MATRIX_VALUES)
                .attr("result", "trailFade"),
        )
        .child(merge(&["trailFade", "SourceGraphic"]));

    let vignette = Element::new("radialGradient")
        .attr("id", "vignette")
        .attr("cx", "50%")
        .attr("cy", "50%")
        .attr("r", "65%")
        .child(stop("0%", "rgba(0,0,0,0)"))
        .child(stop("100%", "rgba(0,0,0,0.55)"));

    let flash_glow = Element::new("radialGradient")
        .attr("id", "flashGlow")
        .attr("cx", "50%")
        .attr("cy", "50%")
        .attr("r", "75%")
        .child(stop("0%", "#FFB347").attr("stop-opacity", "0.85"))
        .child(stop("55%", "#FF5F1F").attr("stop-opacity", "0.45"))
        .child(stop("100%", "#FF2400").attr("stop-opacity", "0"));

    Element::new("defs")
        .child(glow)
        .child(bolt)
        .child(soft_glow)
        .child(trail_glow)
        .child(vignette)
        .child(flash_glow)
}

/// Canvas-sized rect at the origin.
pub fn full_rect(canvas_width: f64) -> Element {
    Element::new("rect")
        .attr("x", "0")
        .attr("y", "0")
        .attr("width", format_number(canvas_width))
        .attr("height", format_number(CANVAS_HEIGHT))
}

/// Solid backdrop followed by the vignette overlay.
pub fn build_backgrounds(canvas_width: f64) -> [Element; 2] {
    [
        full_rect(canvas_width).attr("fill", BACKGROUND_FILL),
        full_rect(canvas_width).attr("fill", "url(#vignette)"),
    ]
}
