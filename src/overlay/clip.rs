//! Polygon boolean operations for the overlap shape

use crate::core::types::Point;
use crate::geometry::format_number;
use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};

/// Shapes thinner than this are treated as having no area
const MIN_AREA: f64 = 1e-9;

/// Convert graph points to a closed geo polygon
pub fn to_polygon(points: &[Point]) -> Polygon<f64> {
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(coords), vec![])
}

fn has_area(polygon: &Polygon<f64>) -> bool {
    polygon.unsigned_area() > MIN_AREA
}

/// Part of `subject` that lies inside `clip`
pub fn intersection(subject: &Polygon<f64>, clip: &Polygon<f64>) -> MultiPolygon<f64> {
    if !has_area(subject) || !has_area(clip) {
        return MultiPolygon::new(vec![]);
    }
    subject.intersection(clip)
}

/// Part of `subject` that lies outside `clip`
pub fn difference(subject: &Polygon<f64>, clip: &Polygon<f64>) -> MultiPolygon<f64> {
    if !has_area(subject) {
        return MultiPolygon::new(vec![]);
    }
    if !has_area(clip) {
        return MultiPolygon::new(vec![subject.clone()]);
    }
    subject.difference(clip)
}

fn ring_path(ring: &LineString<f64>) -> Option<String> {
    let coords: &[Coord<f64>] = &ring.0;
    // geo rings repeat the first coordinate at the end
    let open = match coords {
        [rest @ .., last] if coords.len() > 1 && coords[0] == *last => rest,
        all => all,
    };
    let (first, rest) = open.split_first()?;
    let mut path = format!("M {} {}", format_number(first.x), format_number(first.y));
    for c in rest {
        path.push_str(&format!(" L {} {}", format_number(c.x), format_number(c.y)));
    }
    path.push_str(" Z");
    Some(path)
}

/// Path string with one closed sub-path per ring (draw with an even-odd fill)
pub fn multipolygon_path(shape: &MultiPolygon<f64>) -> String {
    shape
        .0
        .iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .filter_map(ring_path)
        .collect::<Vec<_>>()
        .join(" ")
}
