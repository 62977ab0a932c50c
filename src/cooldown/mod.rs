//! Turn-based cooldown: who has been dispatched recently and must sit out
//!
//! A participant who acts is locked out for `team_size - 1` turns, so the
//! rest of the team gets a turn before anyone repeats.

pub mod roster;

pub use roster::{is_downed, team, ActorKind, Availability, Combatant};

use crate::core::types::ParticipantId;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Lockout length for a team of `team_size` participants
pub fn max_cooldown(team_size: i64) -> u32 {
    team_size.saturating_sub(1).clamp(0, u32::MAX as i64) as u32
}

/// Share of the lockout still remaining, in [0, 1]
pub fn fraction(remaining: f64, max_cooldown: u32) -> f64 {
    if max_cooldown == 0 {
        return 0.0;
    }
    (remaining / max_cooldown as f64).clamp(0.0, 1.0)
}

/// Stored countdowns keyed by participant; absence means fully cooled
///
/// Values are kept as written by the host, so they may be fractional,
/// negative or out of range. Reads normalize them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CooldownScheduler {
    countdowns: AHashMap<ParticipantId, f64>,
}

impl CooldownScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns left, floored and clamped into [0, max_cooldown]
    pub fn remaining(&self, participant: &ParticipantId, max_cooldown: u32) -> u32 {
        let Some(&stored) = self.countdowns.get(participant) else {
            return 0;
        };
        if !stored.is_finite() {
            return 0;
        }
        stored.floor().clamp(0.0, max_cooldown as f64) as u32
    }

    pub fn is_on_cooldown(&self, participant: &ParticipantId, max_cooldown: u32) -> bool {
        self.remaining(participant, max_cooldown) > 0
    }

    pub fn fraction(&self, participant: &ParticipantId, max_cooldown: u32) -> f64 {
        fraction(self.remaining(participant, max_cooldown) as f64, max_cooldown)
    }

    /// Start a full lockout for a participant that just acted
    pub fn record_action(&mut self, participant: &ParticipantId, team_size: usize) {
        let turns = max_cooldown(team_size as i64);
        tracing::debug!("Recording action for {}: {} turn cooldown", participant, turns);
        self.countdowns.insert(participant.clone(), turns as f64);
    }

    /// Raw write used by the combat tracker
    pub fn set_remaining(&mut self, participant: &ParticipantId, value: f64) {
        self.countdowns.insert(participant.clone(), value);
    }

    pub fn clear(&mut self, participant: &ParticipantId) {
        self.countdowns.remove(participant);
    }

    /// One turn passes: every countdown drops by one, exhausted ones are forgotten
    pub fn advance_turn(&mut self) {
        self.countdowns.retain(|_, value| {
            *value -= 1.0;
            value.is_finite() && *value > 0.0
        });
    }

    /// Raw stored value, if any
    pub fn stored(&self, participant: &ParticipantId) -> Option<f64> {
        self.countdowns.get(participant).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> ParticipantId {
        ParticipantId::new("hero")
    }

    #[test]
    fn test_max_cooldown() {
        assert_eq!(max_cooldown(1), 0);
        assert_eq!(max_cooldown(2), 1);
        assert_eq!(max_cooldown(5), 4);
        assert_eq!(max_cooldown(0), 0);
        assert_eq!(max_cooldown(-3), 0);
        assert_eq!(max_cooldown(i64::MIN), 0);
    }

    #[test]
    fn test_absent_is_cooled() {
        let scheduler = CooldownScheduler::new();
        assert_eq!(scheduler.remaining(&hero(), 4), 0);
        assert!(!scheduler.is_on_cooldown(&hero(), 4));
    }

    #[test]
    fn test_remaining_normalizes_stored_values() {
        let mut scheduler = CooldownScheduler::new();
        scheduler.set_remaining(&hero(), 2.7);
        assert_eq!(scheduler.remaining(&hero(), 4), 2);

        scheduler.set_remaining(&hero(), 9.0);
        assert_eq!(scheduler.remaining(&hero(), 4), 4);

        scheduler.set_remaining(&hero(), -2.0);
        assert_eq!(scheduler.remaining(&hero(), 4), 0);

        scheduler.set_remaining(&hero(), f64::NAN);
        assert_eq!(scheduler.remaining(&hero(), 4), 0);

        scheduler.set_remaining(&hero(), f64::INFINITY);
        assert_eq!(scheduler.remaining(&hero(), 4), 0);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(2.0, 4), 0.5);
        assert_eq!(fraction(3.0, 0), 0.0);
        assert_eq!(fraction(9.0, 4), 1.0);
        assert_eq!(fraction(-1.0, 4), 0.0);
    }

    #[test]
    fn test_record_action_and_advance() {
        let mut scheduler = CooldownScheduler::new();
        scheduler.record_action(&hero(), 3);
        assert_eq!(scheduler.remaining(&hero(), 2), 2);
        assert_eq!(scheduler.fraction(&hero(), 2), 1.0);

        scheduler.advance_turn();
        assert!(scheduler.is_on_cooldown(&hero(), 2));
        scheduler.advance_turn();
        assert!(!scheduler.is_on_cooldown(&hero(), 2));
        assert_eq!(scheduler.stored(&hero()), None);
    }

    #[test]
    fn test_solo_team_never_locks_out() {
        let mut scheduler = CooldownScheduler::new();
        scheduler.record_action(&hero(), 1);
        assert!(!scheduler.is_on_cooldown(&hero(), max_cooldown(1)));
    }
}
