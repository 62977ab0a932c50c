use thiserror::Error;

use crate::core::types::{CallId, ParticipantId};

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("Call not found: {0:?}")]
    CallNotFound(CallId),

    #[error("{participant} cannot be assigned: {reason}")]
    ParticipantUnavailable {
        participant: ParticipantId,
        reason: String,
    },

    #[error("No participant assigned to call")]
    NoAssignment,

    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: crate::dispatch::DispatchStatus,
        action: &'static str,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
