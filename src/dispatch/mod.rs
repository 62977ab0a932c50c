//! Dispatch workflow: idle -> assessing -> qualified, and back via reset
//!
//! `DispatchSession` is the pure state machine for one call. `Desk` owns
//! the data a settle needs and `Dispatcher` adds the async pacing delay.

pub mod call;
pub mod desk;
pub mod driver;

pub use call::{Call, CallType};
pub use desk::{Desk, Settlement};
pub use driver::Dispatcher;

use crate::core::error::{DispatchError, Result};
use crate::core::types::ParticipantId;
use crate::fit::FitVerdict;
use crate::labels::LabelSet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    #[default]
    Idle,
    /// Waiting out the settle delay; no verdict yet
    Assessing,
    /// Verdict settled; terminal until reset
    Qualified,
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DispatchStatus::Idle => "idle",
            DispatchStatus::Assessing => "assessing",
            DispatchStatus::Qualified => "qualified",
        };
        f.write_str(name)
    }
}

/// Per-call dispatch state
///
/// Verdict, delta and snapshot are either all set (qualified) or all unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchSession {
    status: DispatchStatus,
    assigned: Option<ParticipantId>,
    verdict: Option<FitVerdict>,
    resource_delta: Option<i32>,
    snapshot: Option<LabelSet>,
}

impl DispatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> DispatchStatus {
        self.status
    }

    pub fn assigned(&self) -> Option<&ParticipantId> {
        self.assigned.as_ref()
    }

    pub fn verdict(&self) -> Option<FitVerdict> {
        self.verdict
    }

    pub fn resource_delta(&self) -> Option<i32> {
        self.resource_delta
    }

    /// Effective labels captured when the verdict settled
    pub fn snapshot(&self) -> Option<&LabelSet> {
        self.snapshot.as_ref()
    }

    pub fn is_assessed(&self) -> bool {
        self.status == DispatchStatus::Qualified
    }

    fn require(&self, status: DispatchStatus, action: &'static str) -> Result<()> {
        if self.status == status {
            Ok(())
        } else {
            Err(DispatchError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }

    /// Toggle the assignment; picking the assigned participant again clears it
    ///
    /// Returns the assignment after the toggle.
    pub fn assign(&mut self, participant: ParticipantId) -> Result<Option<&ParticipantId>> {
        self.require(DispatchStatus::Idle, "assign")?;
        if self.assigned.as_ref() == Some(&participant) || participant.is_empty() {
            self.assigned = None;
        } else {
            self.assigned = Some(participant);
        }
        Ok(self.assigned.as_ref())
    }

    /// idle -> assessing
    pub fn begin(&mut self) -> Result<ParticipantId> {
        self.require(DispatchStatus::Idle, "dispatch")?;
        let participant = self.assigned.clone().ok_or(DispatchError::NoAssignment)?;
        self.status = DispatchStatus::Assessing;
        Ok(participant)
    }

    /// assessing -> qualified
    pub fn complete(&mut self, verdict: FitVerdict, snapshot: LabelSet) -> Result<()> {
        self.require(DispatchStatus::Assessing, "settle")?;
        self.status = DispatchStatus::Qualified;
        self.verdict = Some(verdict);
        self.resource_delta = Some(verdict.resource_delta());
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// assessing -> idle after a failed settle; the assignment is kept
    pub fn revert(&mut self) -> Result<()> {
        self.require(DispatchStatus::Assessing, "revert")?;
        self.status = DispatchStatus::Idle;
        Ok(())
    }

    /// Back to a fresh idle session
    pub fn reset(&mut self) -> Result<()> {
        if self.status == DispatchStatus::Assessing {
            return Err(DispatchError::InvalidTransition {
                from: self.status,
                action: "reset",
            });
        }
        *self = Self::default();
        Ok(())
    }
}
