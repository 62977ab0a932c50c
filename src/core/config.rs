//! Dispatch configuration with documented constants
//!
//! Values can be overridden from a TOML file (see `data/dispatch.toml`);
//! anything left out keeps its default.

use crate::core::error::{DispatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the dispatch workflow and graph layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    // === PACING ===
    /// Delay between entering `assessing` and settling the verdict (ms)
    ///
    /// Purely presentational: lets the table watch the call resolve.
    /// It is never a timeout and nothing is retried.
    pub settle_delay_ms: u64,

    // === FORWARD ===
    /// Lowest value forward can be pushed to by a poor fit
    pub forward_min: i32,

    /// Highest value forward can be pushed to by a great fit
    pub forward_max: i32,

    // === GRAPHS ===
    pub presets: GraphPresets,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 800,
            forward_min: -1,
            forward_max: 8,
            presets: GraphPresets::default(),
        }
    }
}

impl DispatchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Clamp a forward value into the configured bounds
    pub fn clamp_forward(&self, value: i32) -> i32 {
        value.clamp(self.forward_min, self.forward_max)
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DispatchConfig = toml::from_str(content)?;
        config.validate().map_err(DispatchError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded dispatch config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.forward_min > self.forward_max {
            return Err(format!(
                "forward_min ({}) should be <= forward_max ({})",
                self.forward_min, self.forward_max
            ));
        }

        for (name, preset) in self.presets.named() {
            if !(preset.size.is_finite() && preset.size > 0.0) {
                return Err(format!("preset {} size must be positive", name));
            }
            if !(preset.border_width >= 0.0 && preset.border_width * 2.0 < preset.size) {
                return Err(format!(
                    "preset {} border_width ({}) must be in [0, size / 2)",
                    name, preset.border_width
                ));
            }
        }

        Ok(())
    }
}

/// Size and decoration toggles for one graph placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPreset {
    /// Pentagon bounding size in px (icons add padding on top of this)
    pub size: f64,
    pub border_width: f64,
    pub show_inner_lines: bool,
    pub show_icons: bool,
    pub show_spoke_dots: bool,
}

impl Default for GraphPreset {
    fn default() -> Self {
        Self {
            size: 28.0,
            border_width: 1.5,
            show_inner_lines: true,
            show_icons: false,
            show_spoke_dots: false,
        }
    }
}

/// The three placements the host renders graphs in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPresets {
    pub turn_card: GraphPreset,
    pub character_sheet: GraphPreset,
    pub call_sheet: GraphPreset,
}

impl Default for GraphPresets {
    fn default() -> Self {
        Self {
            turn_card: GraphPreset {
                size: 32.0,
                border_width: 1.5,
                show_inner_lines: false,
                show_icons: false,
                show_spoke_dots: false,
            },
            character_sheet: GraphPreset {
                size: 200.0,
                border_width: 2.0,
                show_inner_lines: true,
                show_icons: true,
                show_spoke_dots: false,
            },
            call_sheet: GraphPreset {
                size: 280.0,
                border_width: 2.5,
                show_inner_lines: true,
                show_icons: true,
                show_spoke_dots: true,
            },
        }
    }
}

impl GraphPresets {
    fn named(&self) -> [(&'static str, &GraphPreset); 3] {
        [
            ("turn_card", &self.turn_card),
            ("character_sheet", &self.character_sheet),
            ("call_sheet", &self.call_sheet),
        ]
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DispatchConfig> = OnceLock::new();

/// Get the global dispatch config (initializes with defaults if not set)
pub fn config() -> &'static DispatchConfig {
    CONFIG.get_or_init(DispatchConfig::default)
}

/// Set the global dispatch config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DispatchConfig) -> std::result::Result<(), DispatchConfig> {
    CONFIG.set(config)
}
