//! Call sheet overlay: a character's graph laid over a call's requirements
//!
//! Layers from back to front: pentagon background, grid rings, spokes,
//! requirements outline, character polygon, overlap, spoke dots, icons.
//! Decorative layers follow the preset toggles and never change the
//! verdict or the geometry of the other layers.

pub mod clip;

use crate::core::config::GraphPreset;
use crate::core::types::Point;
use crate::fit::{classify_fit, FitVerdict, RequirementSet};
use crate::geometry::colors::{self, ColorPair, LabelIcon};
use crate::geometry::{line_path, polygon_path, GraphFrame, GridRing, Spoke};
use crate::labels::{long_tooltip, Label, LabelSet};
use geo::Area;
use serde::Serialize;

/// A filled, stroked path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub path: String,
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl Shape {
    fn new(path: String, colors: ColorPair) -> Self {
        Self {
            path,
            fill: colors.fill,
            stroke: colors.stroke,
        }
    }
}

/// Requirements outline; its form depends on how many axes are required
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RequirementShape {
    /// Exactly two requirements: an open segment
    Line { path: String, stroke: &'static str },
    /// Three or more: a dashed, filled polygon
    Polygon {
        path: String,
        fill: &'static str,
        stroke: &'static str,
        dash: &'static str,
    },
}

impl RequirementShape {
    pub fn path(&self) -> &str {
        match self {
            RequirementShape::Line { path, .. } | RequirementShape::Polygon { path, .. } => path,
        }
    }
}

/// How the overlap highlight was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapStrategy {
    /// Whole requirements polygon
    Full,
    /// Requirements polygon intersected with the character polygon
    ClipToCharacter,
    /// Requirements polygon minus the character polygon
    MaskOutsideCharacter,
}

impl OverlapStrategy {
    pub fn for_verdict(verdict: FitVerdict) -> Self {
        match verdict {
            FitVerdict::Great => OverlapStrategy::Full,
            FitVerdict::Good => OverlapStrategy::ClipToCharacter,
            FitVerdict::Poor => OverlapStrategy::MaskOutsideCharacter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapShape {
    pub verdict: FitVerdict,
    pub strategy: OverlapStrategy,
    /// One or more closed sub-paths, fill with even-odd
    pub path: String,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconAnchor {
    pub label: Label,
    pub position: Point,
    pub icon: LabelIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpokeDot {
    pub label: Label,
    pub position: Point,
    pub color: &'static str,
}

/// Everything a renderer needs to draw the call sheet graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayGraph {
    pub frame: GraphFrame,
    pub background: Shape,
    pub grid_rings: Vec<GridRing>,
    pub spokes: Vec<Spoke>,
    pub requirements: Option<RequirementShape>,
    pub character: Option<Shape>,
    pub overlap: Option<OverlapShape>,
    pub requirement_dots: Vec<SpokeDot>,
    pub character_dots: Vec<SpokeDot>,
    pub icons: Vec<IconAnchor>,
    pub verdict: Option<FitVerdict>,
    pub tooltip: Option<String>,
}

fn overlap_colors(verdict: FitVerdict) -> ColorPair {
    match verdict {
        FitVerdict::Great => colors::OVERLAP_GREAT,
        FitVerdict::Good => colors::OVERLAP_GOOD,
        FitVerdict::Poor => colors::OVERLAP_POOR,
    }
}

fn requirement_points(frame: &GraphFrame, requirements: &RequirementSet) -> Vec<Point> {
    requirements
        .iter()
        .map(|(label, threshold)| frame.value_point(label, threshold as f64))
        .collect()
}

fn requirement_shape(points: &[Point]) -> Option<RequirementShape> {
    match points.len() {
        0 | 1 => None,
        2 => Some(RequirementShape::Line {
            path: line_path(points),
            stroke: colors::REQUIREMENT.stroke,
        }),
        _ => Some(RequirementShape::Polygon {
            path: polygon_path(points),
            fill: colors::REQUIREMENT.fill,
            stroke: colors::REQUIREMENT.stroke,
            dash: colors::REQUIREMENT_DASH,
        }),
    }
}

fn overlap_shape(
    verdict: FitVerdict,
    requirement_points: &[Point],
    character_points: &[Point],
) -> OverlapShape {
    let strategy = OverlapStrategy::for_verdict(verdict);
    let requirement = clip::to_polygon(requirement_points);
    let (path, area) = match strategy {
        OverlapStrategy::Full => (polygon_path(requirement_points), requirement.unsigned_area()),
        OverlapStrategy::ClipToCharacter => {
            let shape = clip::intersection(&requirement, &clip::to_polygon(character_points));
            (clip::multipolygon_path(&shape), shape.unsigned_area())
        }
        OverlapStrategy::MaskOutsideCharacter => {
            let shape = clip::difference(&requirement, &clip::to_polygon(character_points));
            (clip::multipolygon_path(&shape), shape.unsigned_area())
        }
    };
    let colors = overlap_colors(verdict);

    OverlapShape {
        verdict,
        strategy,
        path,
        fill: colors.fill,
        stroke: colors.stroke,
        area,
    }
}

/// Compose the overlay for a character (if any) against a call's requirements
///
/// The overlap layer is drawn only once the call is assessed, labels exist
/// and at least three axes are required.
pub fn overlay_graph(
    labels: Option<&LabelSet>,
    requirements: &RequirementSet,
    is_assessed: bool,
    preset: &GraphPreset,
) -> OverlayGraph {
    let frame = GraphFrame::from_preset(preset);
    let req_points = requirement_points(&frame, requirements);
    let char_points = labels.map(|labels| frame.label_points(labels));
    let verdict = labels.map(|labels| classify_fit(labels, requirements));

    let overlap = match (verdict, &char_points) {
        (Some(verdict), Some(points)) if is_assessed && req_points.len() >= 3 => {
            Some(overlap_shape(verdict, &req_points, points))
        }
        _ => None,
    };

    let (requirement_dots, character_dots) = if preset.show_spoke_dots {
        let req_dots = requirements
            .labels()
            .into_iter()
            .zip(req_points.iter())
            .map(|(label, position)| SpokeDot {
                label,
                position: *position,
                color: colors::REQUIREMENT.stroke,
            })
            .collect();
        let char_dots = char_points
            .map(|points| {
                Label::ALL
                    .into_iter()
                    .zip(points)
                    .map(|(label, position)| SpokeDot {
                        label,
                        position,
                        color: colors::SPOKE_DOT,
                    })
                    .collect()
            })
            .unwrap_or_default();
        (req_dots, char_dots)
    } else {
        (Vec::new(), Vec::new())
    };

    let icons = if preset.show_icons {
        Label::ALL
            .into_iter()
            .map(|label| IconAnchor {
                label,
                position: frame.icon_anchor(label),
                icon: colors::label_icon(label),
            })
            .collect()
    } else {
        Vec::new()
    };

    let grid_rings = if preset.show_inner_lines {
        frame.grid_rings()
    } else {
        Vec::new()
    };

    OverlayGraph {
        background: Shape::new(frame.outer_path(), colors::PENTAGON),
        grid_rings,
        spokes: frame.spokes(),
        requirements: requirement_shape(&req_points),
        character: char_points.map(|points| Shape::new(polygon_path(&points), colors::HERO)),
        overlap,
        requirement_dots,
        character_dots,
        icons,
        verdict,
        tooltip: labels.map(long_tooltip),
        frame,
    }
}
