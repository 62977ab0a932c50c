//! Team roster and availability derived from the encounter

use super::CooldownScheduler;
use crate::core::types::ParticipantId;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Character,
    Npc,
}

/// One entry in the host's encounter tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub participant: Option<ParticipantId>,
    pub kind: ActorKind,
    #[serde(default)]
    pub defeated: bool,
    #[serde(default)]
    pub hp: Option<f64>,
}

impl Combatant {
    pub fn character(participant: impl Into<String>) -> Self {
        Self {
            participant: Some(ParticipantId::new(participant)),
            kind: ActorKind::Character,
            defeated: false,
            hp: None,
        }
    }

    pub fn npc() -> Self {
        Self {
            participant: None,
            kind: ActorKind::Npc,
            defeated: false,
            hp: None,
        }
    }
}

/// Defeated, or hit points at or below zero (unknown hp is not downed)
pub fn is_downed(combatant: &Combatant) -> bool {
    combatant.defeated || combatant.hp.is_some_and(|hp| hp <= 0.0)
}

/// Characters in the encounter, one entry per participant, tracker order kept
pub fn team(combatants: &[Combatant]) -> Vec<&Combatant> {
    let mut seen = AHashSet::new();
    combatants
        .iter()
        .filter(|c| c.kind == ActorKind::Character)
        .filter(|c| match &c.participant {
            Some(id) => seen.insert(id.clone()),
            None => false,
        })
        .collect()
}

/// Whether a team member can be assigned right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Availability {
    Available,
    Downed,
    Cooldown { remaining: u32 },
}

impl Availability {
    /// Downed takes priority over cooldown
    pub fn of(combatant: &Combatant, scheduler: &CooldownScheduler, max_cooldown: u32) -> Self {
        if is_downed(combatant) {
            return Availability::Downed;
        }
        let remaining = combatant
            .participant
            .as_ref()
            .map_or(0, |id| scheduler.remaining(id, max_cooldown));
        if remaining > 0 {
            Availability::Cooldown { remaining }
        } else {
            Availability::Available
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Short badge text, none when available
    pub fn reason(&self) -> Option<String> {
        match self {
            Availability::Available => None,
            Availability::Downed => Some("Downed".to_string()),
            Availability::Cooldown { remaining } => Some(format!("CD: {}", remaining)),
        }
    }

    pub fn tooltip(&self, name: &str) -> String {
        match self {
            Availability::Available => format!("{} - Click to assign", name),
            Availability::Downed => format!("{} (Downed)", name),
            Availability::Cooldown { remaining } => {
                format!("{} (Cooldown: {} turns)", name, remaining)
            }
        }
    }
}
