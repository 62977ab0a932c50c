pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, DispatchConfig, GraphPreset, GraphPresets};
pub use error::{DispatchError, Result};
pub use types::{CallId, ParticipantId, Point};
