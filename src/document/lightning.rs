//! Lightning overlay: a periodic flash plus a glowing bolt polyline.

use kurbo::{Affine, Point};

use crate::{
    document::defs::full_rect,
    document::tree::Element,
    foundation::format::format_number,
    layout::columns::BASE_CANVAS_WIDTH,
};

/// Bolt vertices authored against the base canvas width.
pub const BOLT_POINTS: [(f64, f64); 7] = [
    (250.0, -60.0),
    (262.0, 80.0),
    (242.0, 170.0),
    (260.0, 260.0),
    (238.0, 360.0),
    (252.0, 480.0),
    (246.0, 560.0),
];

const FLASH_PERIOD: &str = "12s";

/// Bolt vertices stretched horizontally to `canvas_width`.
pub fn bolt_points(canvas_width: f64) -> Vec<Point> {
    let sx = if BASE_CANVAS_WIDTH != 0.0 {
        canvas_width / BASE_CANVAS_WIDTH
    } else {
        1.0
    };
    let xform = Affine::scale_non_uniform(sx, 1.0);
    BOLT_POINTS
        .iter()
        .map(|&(x, y)| xform * Point::new(x, y))
        .collect()
}

fn animate(attribute: &str, values: &str, dur: &str) -> Element {
    Element::new("animate")
        .attr("attributeName", attribute)
        .attr("values", values)
        .attr("dur", dur)
}

pub fn build_lightning(canvas_width: f64) -> Element {
    let points = bolt_points(canvas_width)
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(" ");

    let flash = full_rect(canvas_width)
        .attr("fill", "url(#flashGlow)")
        .attr("opacity", "0")
        .child(
            animate("opacity", "0;0;0.88;0", FLASH_PERIOD)
                .attr("keyTimes", "0;0.8;0.84;1")
                .attr("repeatCount", "indefinite"),
        );

    let bolt = Element::new("polyline")
        .attr("points", points)
        .attr("stroke", "url(#gradBolt)")
        .attr("stroke-width", "12")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("fill", "none")
        .attr("opacity", "0")
        .attr("filter", "url(#softGlow)")
        .child(
            animate("opacity", "0;0;1;0", FLASH_PERIOD)
                .attr("keyTimes", "0;0.82;0.86;1")
                .attr("repeatCount", "indefinite"),
        )
        .child(
            animate("stroke-width", "12;16;12", FLASH_PERIOD)
                .attr("begin", "-0.4s")
                .attr("repeatCount", "indefinite"),
        )
        .child(
            animate("stroke-dashoffset", "0;-140;0", "0.9s").attr("repeatCount", "indefinite"),
        );

    Element::new("g")
        .attr("id", "lightning")
        .attr("pointer-events", "none")
        .child(flash)
        .child(bolt)
}
