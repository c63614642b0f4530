use serde::{Deserialize, Serialize};

use crate::constants::{
    LABEL_RADIUS_RATIO, POINTER_FRAME_OFFSET_DEG, SEGMENT_LIGHTNESS, SEGMENT_SATURATION,
    WHEEL_CENTER, WHEEL_RADIUS,
};
use crate::prize::PrizeCatalog;

/// One drawn slice of the wheel, derived from a prize option.
///
/// Angles are in degrees, 0° on the +x axis, growing clockwise in screen
/// coordinates (SVG y points down).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSegment {
    pub name: String,
    pub weight: f64,
    pub angle: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub text_x: f64,
    pub text_y: f64,
    pub text_rotation: f64,
    pub fill: String,
    pub probability: f64,
}

impl WheelSegment {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angle / 2.0
    }
}

/// SVG path data for a pie slice from `start_angle` to `end_angle`.
pub fn arc_path(x: f64, y: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let span = end_angle - start_angle;

    // A single arc whose endpoints coincide draws nothing, so a full disc
    // is two half circles.
    if span >= 360.0 - 1e-9 {
        let start = start_angle.to_radians();
        let x1 = x + r * start.cos();
        let y1 = y + r * start.sin();
        let x2 = x - r * start.cos();
        let y2 = y - r * start.sin();
        return format!(
            "M {x1} {y1} A {r} {r} 0 1 1 {x2} {y2} A {r} {r} 0 1 1 {x1} {y1} Z",
        );
    }

    let start = start_angle.to_radians();
    let end = end_angle.to_radians();

    let x1 = x + r * start.cos();
    let y1 = y + r * start.sin();
    let x2 = x + r * end.cos();
    let y2 = y + r * end.sin();

    let large_arc_flag = if span > 180.0 { 1 } else { 0 };

    [
        format!("M {} {}", x, y),
        format!("L {} {}", x1, y1),
        format!("A {} {} 0 {} 1 {} {}", r, r, large_arc_flag, x2, y2),
        "Z".to_string(),
    ]
    .join(" ")
}

pub fn segment_fill(start_angle: f64) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        start_angle, SEGMENT_SATURATION, SEGMENT_LIGHTNESS
    )
}

/// Label anchor (x, y) and rotation for a segment whose bisector is `mid_angle`.
///
/// Labels whose bisector ends up strictly in the left half of the rendered
/// wheel, after the pointer frame offset, are turned 180° so they read left
/// to right.
pub fn label_placement(mid_angle: f64) -> (f64, f64, f64) {
    let mid_rad = mid_angle.to_radians();
    let text_radius = WHEEL_RADIUS * LABEL_RADIUS_RATIO;
    let text_x = WHEEL_CENTER.0 + text_radius * mid_rad.cos();
    let text_y = WHEEL_CENTER.1 + text_radius * mid_rad.sin();

    let on_screen = (mid_angle + POINTER_FRAME_OFFSET_DEG).rem_euclid(360.0);
    let mut text_rotation = mid_angle;
    if on_screen > 90.0 && on_screen < 270.0 {
        text_rotation += 180.0;
    }

    (text_x, text_y, text_rotation)
}

/// Lays the catalog out around the wheel, in order, with no gaps.
pub fn layout_segments(catalog: &PrizeCatalog) -> Vec<WheelSegment> {
    let total_weight = catalog.total_weight();
    let mut current_angle = 0.0;

    catalog
        .options()
        .iter()
        .map(|option| {
            let angle = option.weight / total_weight * 360.0;
            let start_angle = current_angle;
            let end_angle = current_angle + angle;
            current_angle = end_angle;

            let mut segment = WheelSegment {
                name: option.name.clone(),
                weight: option.weight,
                angle,
                start_angle,
                end_angle,
                path: arc_path(
                    WHEEL_CENTER.0,
                    WHEEL_CENTER.1,
                    WHEEL_RADIUS,
                    start_angle,
                    end_angle,
                ),
                text_x: 0.0,
                text_y: 0.0,
                text_rotation: 0.0,
                fill: segment_fill(start_angle),
                probability: option.weight / total_weight,
            };
            let (text_x, text_y, text_rotation) = label_placement(segment.mid_angle());
            segment.text_x = text_x;
            segment.text_y = text_y;
            segment.text_rotation = text_rotation;
            segment
        })
        .collect()
}
