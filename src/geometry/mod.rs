//! Pentagon geometry: maps label values onto graph points and path strings
//!
//! Screen coordinates, y grows downward. Vertex 0 sits straight above the
//! center and the rest follow clockwise in label order.

pub mod colors;
pub mod frame;
pub mod graph;

pub use frame::{GraphFrame, GridRing, Spoke};
pub use graph::{labels_graph_path, GraphPath};

use crate::core::types::Point;
use crate::labels::{MAX_VALUE, MIN_VALUE, VALUE_RANGE};
use std::f64::consts::PI;

/// Angle between consecutive axes
pub const AXIS_STEP: f64 = 2.0 * PI / 5.0;

/// Angle of the first axis (straight up)
pub const START_ANGLE: f64 = -PI / 2.0;

/// Angle of the axis at `index` (0..5)
pub fn axis_angle(index: usize) -> f64 {
    START_ANGLE + index as f64 * AXIS_STEP
}

/// Position along an axis: 0.0 at -3, 1.0 at +4
///
/// NaN passes through; infinities clamp to the ends.
pub fn value_to_radius_fraction(value: f64) -> f64 {
    let min = MIN_VALUE as f64;
    (value.clamp(min, MAX_VALUE as f64) - min) / VALUE_RANGE as f64
}

/// Point at `distance` from the center along the given axis
pub fn axis_point(cx: f64, cy: f64, index: usize, distance: f64) -> Point {
    let angle = axis_angle(index);
    Point::new(cx + distance * angle.cos(), cy + distance * angle.sin())
}

/// The five outer vertices of a pentagon, starting at the top
pub fn pentagon_vertices(cx: f64, cy: f64, radius: f64) -> [Point; 5] {
    std::array::from_fn(|i| axis_point(cx, cy, i, radius))
}

/// Values that get an inner grid ring (the two extremes are excluded)
pub fn inner_grid_values() -> Vec<i32> {
    ((MIN_VALUE + 1)..MAX_VALUE).collect()
}

/// Closed path: `M x0 y0 L x1 y1 ... Z`
///
/// Empty input gives an empty string; a single point degenerates to `M x y  Z`.
pub fn polygon_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let segments: Vec<String> = rest
        .iter()
        .map(|p| format!("L {} {}", format_number(p.x), format_number(p.y)))
        .collect();
    format!(
        "M {} {} {} Z",
        format_number(first.x),
        format_number(first.y),
        segments.join(" ")
    )
}

/// Open polyline: `M x0 y0 L x1 y1 ...`
pub fn line_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut path = format!("M {} {}", format_number(first.x), format_number(first.y));
    for p in rest {
        path.push_str(&format!(" L {} {}", format_number(p.x), format_number(p.y)));
    }
    path
}

/// JavaScript number text: shortest round-trip digits, no trailing `.0`,
/// `-0` printed as `0`, exponent form below 1e-6 and from 1e21
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}
