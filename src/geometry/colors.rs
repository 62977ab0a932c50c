//! Color definitions for graphs, overlays and label icons
//!
//! Colors are CSS color strings the host drops straight into its markup.

use crate::labels::Label;
use serde::Serialize;

/// Fill and stroke used together for one shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl ColorPair {
    pub const fn new(fill: &'static str, stroke: &'static str) -> Self {
        Self { fill, stroke }
    }
}

// Single-character graph
pub const DEFAULT: ColorPair = ColorPair::new("rgba(232, 197, 71, 0.55)", "#e8c547"); // Yellow
pub const BONUS: ColorPair = ColorPair::new("rgba(76, 175, 80, 0.55)", "#4caf50"); // Green
pub const CONDITION: ColorPair = ColorPair::new("rgba(224, 82, 82, 0.55)", "#e05252"); // Red

// Shared chrome
pub const GRID_LINES: &str = "rgba(255, 255, 255, 0.15)";
pub const PENTAGON: ColorPair = ColorPair::new("rgba(20, 20, 30, 0.6)", "rgba(255, 255, 255, 0.4)");
pub const SPOKE_DOT: &str = "#ffffff";

// Call sheet overlay
pub const HERO: ColorPair = ColorPair::new("rgba(66, 135, 245, 0.45)", "#4287f5"); // Blue
pub const REQUIREMENT: ColorPair = ColorPair::new("rgba(160, 160, 160, 0.3)", "#a0a0a0"); // Grey
pub const OVERLAP_GREAT: ColorPair = ColorPair::new("rgba(76, 175, 80, 0.6)", "#4caf50");
pub const OVERLAP_GOOD: ColorPair = ColorPair::new("rgba(232, 197, 71, 0.6)", "#e8c547");
pub const OVERLAP_POOR: ColorPair = ColorPair::new("rgba(224, 82, 82, 0.6)", "#e05252");

/// Dash pattern for the requirements outline
pub const REQUIREMENT_DASH: &str = "4 3";

/// Glyph drawn next to an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelIcon {
    /// Font Awesome codepoint
    pub unicode: &'static str,
    pub class: &'static str,
    pub color: &'static str,
}

/// Icon for each label
pub fn label_icon(label: Label) -> LabelIcon {
    match label {
        Label::Danger => LabelIcon {
            unicode: "\u{f6de}",
            class: "fa-solid fa-hand-fist",
            color: "#e05252",
        },
        Label::Freak => LabelIcon {
            unicode: "\u{f6e2}",
            class: "fa-solid fa-ghost",
            color: "#9b59b6",
        },
        Label::Savior => LabelIcon {
            unicode: "\u{f3ed}",
            class: "fa-solid fa-shield-halved",
            color: "#4287f5",
        },
        Label::Mundane => LabelIcon {
            unicode: "\u{f015}",
            class: "fa-solid fa-house",
            color: "#4caf50",
        },
        Label::Superior => LabelIcon {
            unicode: "\u{f521}",
            class: "fa-solid fa-crown",
            color: "#e8c547",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_icon_is_red() {
        assert_eq!(label_icon(Label::Danger).color, "#e05252");
    }

    #[test]
    fn test_icons_are_distinct() {
        for (i, a) in Label::ALL.iter().enumerate() {
            for b in &Label::ALL[i + 1..] {
                assert_ne!(label_icon(*a).class, label_icon(*b).class);
            }
        }
    }

    #[test]
    fn test_graph_fills_are_translucent() {
        for pair in [DEFAULT, BONUS, CONDITION, HERO, REQUIREMENT] {
            assert!(pair.fill.starts_with("rgba"));
        }
    }
}
