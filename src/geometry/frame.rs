//! Graph frame layout: canvas size, center and outer radius for a preset

use super::colors;
use super::{axis_point, pentagon_vertices, polygon_path, value_to_radius_fraction};
use crate::core::config::GraphPreset;
use crate::core::types::Point;
use crate::labels::{Label, LabelSet};
use serde::Serialize;

/// Extra room on each side of the pentagon when icons are drawn, as a share of size
pub const ICON_PADDING_RATIO: f64 = 0.15;

/// Where a graph sits on its canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphFrame {
    /// Square canvas side length
    pub canvas: f64,
    pub center: Point,
    /// Outer pentagon radius (value +4)
    pub radius: f64,
    pub padding: f64,
}

/// Line from the center to one outer vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub label: Label,
    pub from: Point,
    pub to: Point,
    pub stroke: &'static str,
}

/// Pentagon outline at one inner grid value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRing {
    pub value: i32,
    pub path: String,
    pub stroke: &'static str,
}

impl GraphFrame {
    pub fn from_preset(preset: &GraphPreset) -> Self {
        let padding = if preset.show_icons {
            preset.size * ICON_PADDING_RATIO
        } else {
            0.0
        };
        let canvas = preset.size + padding * 2.0;
        let half = canvas / 2.0;
        Self {
            canvas,
            center: Point::new(half, half),
            radius: (preset.size / 2.0 - preset.border_width).max(0.0),
            padding,
        }
    }

    /// Outer pentagon vertices
    pub fn vertices(&self) -> [Point; 5] {
        pentagon_vertices(self.center.x, self.center.y, self.radius)
    }

    /// Point for `value` on the axis of `label`
    pub fn value_point(&self, label: Label, value: f64) -> Point {
        let distance = self.radius * value_to_radius_fraction(value);
        axis_point(self.center.x, self.center.y, label.index(), distance)
    }

    /// Five points, one per axis, for a full label set
    pub fn label_points(&self, labels: &LabelSet) -> [Point; 5] {
        Label::ALL.map(|label| self.value_point(label, labels.get(label) as f64))
    }

    pub fn outer_path(&self) -> String {
        polygon_path(&self.vertices())
    }

    pub fn spokes(&self) -> Vec<Spoke> {
        Label::ALL
            .into_iter()
            .zip(self.vertices())
            .map(|(label, to)| Spoke {
                label,
                from: self.center,
                to,
                stroke: colors::GRID_LINES,
            })
            .collect()
    }

    /// One ring per inner grid value, from the innermost outward
    pub fn grid_rings(&self) -> Vec<GridRing> {
        super::inner_grid_values()
            .into_iter()
            .map(|value| {
                let points = Label::ALL.map(|label| self.value_point(label, value as f64));
                GridRing {
                    value,
                    path: polygon_path(&points),
                    stroke: colors::GRID_LINES,
                }
            })
            .collect()
    }

    /// Icon anchor just outside the outer vertex of `label`
    pub fn icon_anchor(&self, label: Label) -> Point {
        let distance = self.radius + self.padding / 2.0;
        axis_point(self.center.x, self.center.y, label.index(), distance)
    }
}
