//! Calls: dispatchable vignettes with requirements and their session

use super::DispatchSession;
use crate::core::types::CallId;
use crate::fit::RequirementSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallType {
    #[default]
    Assault,
    Rescue,
    Investigation,
    Social,
    Disaster,
    MinorInconvenience,
    Robbery,
    HoneyHeist,
    Pursuit,
}

impl CallType {
    pub const ALL: [CallType; 9] = [
        CallType::Assault,
        CallType::Rescue,
        CallType::Investigation,
        CallType::Social,
        CallType::Disaster,
        CallType::MinorInconvenience,
        CallType::Robbery,
        CallType::HoneyHeist,
        CallType::Pursuit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CallType::Assault => "assault",
            CallType::Rescue => "rescue",
            CallType::Investigation => "investigation",
            CallType::Social => "social",
            CallType::Disaster => "disaster",
            CallType::MinorInconvenience => "minor-inconvenience",
            CallType::Robbery => "robbery",
            CallType::HoneyHeist => "honey-heist",
            CallType::Pursuit => "pursuit",
        }
    }

    /// Font Awesome class for the call card
    pub fn icon(self) -> &'static str {
        match self {
            CallType::Assault => "fa-solid fa-fist-raised",
            CallType::Rescue => "fa-solid fa-life-ring",
            CallType::Investigation => "fa-solid fa-magnifying-glass",
            CallType::Social => "fa-solid fa-comments",
            CallType::Disaster => "fa-solid fa-house-crack",
            CallType::MinorInconvenience => "fa-solid fa-mug-hot",
            CallType::Robbery => "fa-solid fa-mask",
            CallType::HoneyHeist => "fa-solid fa-paw",
            CallType::Pursuit => "fa-solid fa-person-running",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CallType::Assault => "Assault",
            CallType::Rescue => "Rescue",
            CallType::Investigation => "Investigation",
            CallType::Social => "Social",
            CallType::Disaster => "Disaster",
            CallType::MinorInconvenience => "Minor Inconvenience",
            CallType::Robbery => "Robbery",
            CallType::HoneyHeist => "Honey Heist",
            CallType::Pursuit => "Pursuit",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CallType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        CallType::ALL
            .into_iter()
            .find(|call_type| call_type.key() == normalized)
            .ok_or_else(|| format!("unknown call type: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,
    pub name: String,
    #[serde(default)]
    pub call_type: CallType,
    #[serde(default)]
    pub requirements: RequirementSet,
    #[serde(default)]
    pub(super) session: DispatchSession,
}

impl Call {
    pub fn new(name: impl Into<String>, call_type: CallType, requirements: RequirementSet) -> Self {
        Self {
            id: CallId::new(),
            name: name.into(),
            call_type,
            requirements,
            session: DispatchSession::new(),
        }
    }

    pub fn session(&self) -> &DispatchSession {
        &self.session
    }
}
