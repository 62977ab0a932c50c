//! Plain single-character graph (no requirement overlay)

use super::colors::{self, ColorPair};
use super::{polygon_path, GraphFrame, GridRing};
use crate::core::config::GraphPreset;
use crate::labels::EffectiveLabels;
use serde::Serialize;

/// Everything a renderer needs to draw one character's graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPath {
    pub frame: GraphFrame,
    pub path: String,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub outer_path: String,
    pub grid_rings: Vec<GridRing>,
    pub tooltip: String,
}

/// Colors for a character graph; a net bonus wins over a net penalty
pub fn color_scheme(effective: &EffectiveLabels) -> ColorPair {
    if effective.is_positive {
        colors::BONUS
    } else if effective.is_negative {
        colors::CONDITION
    } else {
        colors::DEFAULT
    }
}

pub fn labels_graph_path(effective: &EffectiveLabels, preset: &GraphPreset) -> GraphPath {
    let frame = GraphFrame::from_preset(preset);
    let scheme = color_scheme(effective);
    let grid_rings = if preset.show_inner_lines {
        frame.grid_rings()
    } else {
        Vec::new()
    };

    GraphPath {
        path: polygon_path(&frame.label_points(&effective.labels)),
        fill: scheme.fill,
        stroke: scheme.stroke,
        outer_path: frame.outer_path(),
        grid_rings,
        tooltip: effective.tooltip(),
        frame,
    }
}
