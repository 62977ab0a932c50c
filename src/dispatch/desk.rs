//! The dispatch desk: characters, calls, cooldowns and the encounter roster

use super::{Call, DispatchSession, DispatchStatus};
use crate::cooldown::{self, team, Availability, Combatant, CooldownScheduler};
use crate::core::config::{config, DispatchConfig, GraphPreset};
use crate::core::error::{DispatchError, Result};
use crate::core::types::{CallId, ParticipantId};
use crate::fit::{classify_fit, label_rows, FitVerdict, LabelRow};
use crate::labels::{Character, LabelSet};
use crate::overlay::{overlay_graph, OverlayGraph};
use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// Outcome of one settled dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub call_id: CallId,
    pub participant: ParticipantId,
    pub name: String,
    pub verdict: FitVerdict,
    pub resource_delta: i32,
    /// Forward after the delta was applied (or refused at a bound)
    pub forward: i32,
    /// False when the bound left forward unchanged
    pub forward_changed: bool,
}

impl Settlement {
    /// Sheet line such as `Beacon takes +1 Forward`, none for a good fit
    pub fn forward_phrase(&self) -> Option<String> {
        forward_text(self.resource_delta).map(|text| format!("{} takes {}", self.name, text))
    }
}

fn forward_text(delta: i32) -> Option<String> {
    match delta {
        0 => None,
        d => Some(format!("{:+} Forward", d)),
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is a {}.", self.name, self.verdict.phrase())?;
        if let Some(text) = forward_text(self.resource_delta) {
            write!(f, " {}", text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Desk {
    config: DispatchConfig,
    characters: AHashMap<ParticipantId, Character>,
    calls: AHashMap<CallId, Call>,
    cooldowns: CooldownScheduler,
    encounter: Vec<Combatant>,
}

/// A desk on the process-wide configuration
impl Default for Desk {
    fn default() -> Self {
        Self::new(config().clone())
    }
}

impl Desk {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            characters: AHashMap::default(),
            calls: AHashMap::default(),
            cooldowns: CooldownScheduler::new(),
            encounter: Vec::new(),
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    // === CHARACTERS ===

    pub fn add_character(&mut self, id: ParticipantId, character: Character) {
        self.characters.insert(id, character);
    }

    pub fn remove_character(&mut self, id: &ParticipantId) -> Option<Character> {
        self.characters.remove(id)
    }

    pub fn character(&self, id: &ParticipantId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Mutable access for the host's sheet edits
    pub fn character_mut(&mut self, id: &ParticipantId) -> Option<&mut Character> {
        self.characters.get_mut(id)
    }

    // === CALLS ===

    pub fn add_call(&mut self, call: Call) -> CallId {
        let id = call.id;
        self.calls.insert(id, call);
        id
    }

    pub fn call(&self, id: CallId) -> Result<&Call> {
        self.calls.get(&id).ok_or(DispatchError::CallNotFound(id))
    }

    pub fn session(&self, id: CallId) -> Result<&DispatchSession> {
        self.call(id).map(Call::session)
    }

    fn call_mut(&mut self, id: CallId) -> Result<&mut Call> {
        self.calls.get_mut(&id).ok_or(DispatchError::CallNotFound(id))
    }

    // === ENCOUNTER & COOLDOWNS ===

    pub fn set_encounter(&mut self, combatants: Vec<Combatant>) {
        self.encounter = combatants;
    }

    /// Characters on the team; zero without an encounter
    pub fn team_size(&self) -> usize {
        team(&self.encounter).len()
    }

    pub fn max_cooldown(&self) -> u32 {
        cooldown::max_cooldown(self.team_size() as i64)
    }

    pub fn cooldowns(&self) -> &CooldownScheduler {
        &self.cooldowns
    }

    /// Write access for the combat tracker's turn advances
    pub fn cooldowns_mut(&mut self) -> &mut CooldownScheduler {
        &mut self.cooldowns
    }

    pub fn is_on_cooldown(&self, id: &ParticipantId) -> bool {
        self.cooldowns.is_on_cooldown(id, self.max_cooldown())
    }

    /// Availability of every team member, in tracker order
    pub fn team_availability(&self) -> Vec<(ParticipantId, Availability)> {
        let max_cd = self.max_cooldown();
        team(&self.encounter)
            .into_iter()
            .filter_map(|combatant| {
                let id = combatant.participant.clone()?;
                Some((id, Availability::of(combatant, &self.cooldowns, max_cd)))
            })
            .collect()
    }

    fn availability(&self, id: &ParticipantId) -> Availability {
        let max_cd = self.max_cooldown();
        team(&self.encounter)
            .into_iter()
            .find(|combatant| combatant.participant.as_ref() == Some(id))
            .map(|combatant| Availability::of(combatant, &self.cooldowns, max_cd))
            .unwrap_or_else(|| {
                let remaining = self.cooldowns.remaining(id, max_cd);
                if remaining > 0 {
                    Availability::Cooldown { remaining }
                } else {
                    Availability::Available
                }
            })
    }

    // === DISPATCH ===

    /// Toggle a call's assignment; downed or cooling participants are refused
    pub fn assign(&mut self, call_id: CallId, participant: ParticipantId) -> Result<Option<ParticipantId>> {
        let already_assigned = self.session(call_id)?.assigned() == Some(&participant);
        if !already_assigned {
            if !self.characters.contains_key(&participant) {
                return Err(DispatchError::ParticipantNotFound(participant));
            }
            let availability = self.availability(&participant);
            if let Some(reason) = availability.reason() {
                return Err(DispatchError::ParticipantUnavailable { participant, reason });
            }
        }

        let call = self.call_mut(call_id)?;
        let assigned = call.session.assign(participant)?.cloned();
        tracing::debug!("Call '{}' assignment: {:?}", call.name, assigned);
        Ok(assigned)
    }

    /// idle -> assessing; the verdict is computed later by `settle`
    pub fn begin_dispatch(&mut self, call_id: CallId) -> Result<ParticipantId> {
        let call = self.call_mut(call_id)?;
        let participant = call.session.begin()?;
        tracing::info!("Dispatching {} to '{}'", participant, call.name);
        Ok(participant)
    }

    /// assessing -> qualified: classify, snapshot, adjust forward, start the cooldown
    ///
    /// A participant that disappeared during the delay reverts the call to
    /// idle and nothing else changes.
    pub fn settle(&mut self, call_id: CallId) -> Result<Settlement> {
        let team_size = team(&self.encounter).len();
        let call = self.calls.get_mut(&call_id).ok_or(DispatchError::CallNotFound(call_id))?;

        if call.session.status() != DispatchStatus::Assessing {
            return Err(DispatchError::InvalidTransition {
                from: call.session.status(),
                action: "settle",
            });
        }
        let participant = call
            .session
            .assigned()
            .cloned()
            .ok_or(DispatchError::NoAssignment)?;

        let Some(character) = self.characters.get_mut(&participant) else {
            call.session.revert()?;
            tracing::warn!("Settle failed for '{}': {} not found", call.name, participant);
            return Err(DispatchError::ParticipantNotFound(participant));
        };

        let effective = character.effective();
        let verdict = classify_fit(&effective.labels, &call.requirements);
        let delta = verdict.resource_delta();

        let before = character.forward;
        let after = self.config.clamp_forward(before.saturating_add(delta));
        let forward_changed = after != before;
        if forward_changed {
            character.forward = after;
        } else if delta != 0 {
            tracing::debug!("{} forward held at {}", character.name, before);
        }

        self.cooldowns.record_action(&participant, team_size);
        call.session.complete(verdict, effective.labels)?;

        let settlement = Settlement {
            call_id,
            participant,
            name: character.name.clone(),
            verdict,
            resource_delta: delta,
            forward: after,
            forward_changed,
        };
        tracing::info!("Settled '{}': {}", call.name, settlement);
        Ok(settlement)
    }

    /// Clear a call back to a fresh idle session
    pub fn reset(&mut self, call_id: CallId) -> Result<()> {
        let call = self.call_mut(call_id)?;
        call.session.reset()?;
        tracing::info!("Reset call '{}'", call.name);
        Ok(())
    }

    // === READ-ONLY VIEWS ===

    /// Verdict the participant would get right now; changes nothing
    pub fn preview(&self, call_id: CallId, participant: &ParticipantId) -> Result<FitVerdict> {
        let call = self.call(call_id)?;
        let character = self
            .character(participant)
            .ok_or_else(|| DispatchError::ParticipantNotFound(participant.clone()))?;
        Ok(classify_fit(&character.effective().labels, &call.requirements))
    }

    /// Labels the call sheet graph shows: snapshot, then hovered, then assigned
    pub fn graph_labels(&self, call_id: CallId, hovered: Option<&ParticipantId>) -> Result<Option<LabelSet>> {
        let session = self.session(call_id)?;
        if let Some(snapshot) = session.snapshot() {
            return Ok(Some(*snapshot));
        }
        let live = hovered
            .into_iter()
            .chain(session.assigned())
            .find_map(|id| self.character(id))
            .map(|character| character.effective().labels);
        Ok(live)
    }

    pub fn overlay(&self, call_id: CallId, hovered: Option<&ParticipantId>, preset: &GraphPreset) -> Result<OverlayGraph> {
        let call = self.call(call_id)?;
        let labels = self.graph_labels(call_id, hovered)?;
        Ok(overlay_graph(
            labels.as_ref(),
            &call.requirements,
            call.session.is_assessed(),
            preset,
        ))
    }

    /// Call sheet table rows for the labels the graph shows
    pub fn label_rows(&self, call_id: CallId, hovered: Option<&ParticipantId>) -> Result<Vec<LabelRow>> {
        let call = self.call(call_id)?;
        let labels = self.graph_labels(call_id, hovered)?;
        Ok(label_rows(labels.as_ref(), &call.requirements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::CallType;
    use crate::fit::RequirementSet;
    use crate::labels::Label;

    fn beacon() -> Character {
        Character::new("Beacon", LabelSet::from_values([2, 0, 1, 1, -1]))
    }

    fn desk_with_call(requirements: RequirementSet) -> (Desk, CallId, ParticipantId) {
        let mut desk = Desk::new(DispatchConfig::default());
        let id = ParticipantId::new("beacon");
        desk.add_character(id.clone(), beacon());
        desk.set_encounter(vec![
            Combatant::character("beacon"),
            Combatant::character("nova"),
            Combatant::npc(),
        ]);
        let call_id = desk.add_call(Call::new("Bank job", CallType::Robbery, requirements));
        (desk, call_id, id)
    }

    #[test]
    fn test_default_desk_uses_global_config() {
        let desk = Desk::default();
        assert_eq!(desk.config(), config());
        assert_eq!(desk.team_size(), 0);
        assert_eq!(desk.max_cooldown(), 0);
    }

    #[test]
    fn test_settle_great_fit() {
        let (mut desk, call_id, id) = desk_with_call(RequirementSet::new().with(Label::Danger, 2));
        desk.assign(call_id, id.clone()).unwrap();
        desk.begin_dispatch(call_id).unwrap();
        let settlement = desk.settle(call_id).unwrap();

        assert_eq!(settlement.verdict, FitVerdict::Great);
        assert_eq!(settlement.resource_delta, 1);
        assert!(settlement.forward_changed);
        assert_eq!(desk.character(&id).unwrap().forward, 1);
        assert!(desk.is_on_cooldown(&id));
        assert_eq!(settlement.to_string(), "Beacon is a great fit. +1 Forward");
        assert_eq!(settlement.forward_phrase().as_deref(), Some("Beacon takes +1 Forward"));
    }

    #[test]
    fn test_good_fit_has_no_forward_text() {
        let requirements = RequirementSet::new()
            .with(Label::Danger, 2)
            .with(Label::Savior, 1)
            .with(Label::Superior, 2);
        let (mut desk, call_id, id) = desk_with_call(requirements);
        desk.assign(call_id, id).unwrap();
        desk.begin_dispatch(call_id).unwrap();
        let settlement = desk.settle(call_id).unwrap();
        assert_eq!(settlement.verdict, FitVerdict::Good);
        assert_eq!(settlement.to_string(), "Beacon is a decent fit.");
        assert_eq!(settlement.forward_phrase(), None);
    }

    #[test]
    fn test_settle_requires_assessing() {
        let (mut desk, call_id, _) = desk_with_call(RequirementSet::new());
        assert!(matches!(
            desk.settle(call_id),
            Err(DispatchError::InvalidTransition { from: DispatchStatus::Idle, .. })
        ));
    }

    #[test]
    fn test_preview_changes_nothing() {
        let (desk, call_id, id) = desk_with_call(RequirementSet::new().with(Label::Freak, 3));
        assert_eq!(desk.preview(call_id, &id).unwrap(), FitVerdict::Poor);
        assert_eq!(desk.session(call_id).unwrap(), &DispatchSession::default());
        assert_eq!(desk.character(&id).unwrap().forward, 0);
    }

    #[test]
    fn test_assign_refuses_cooling_and_downed() {
        let (mut desk, call_id, id) = desk_with_call(RequirementSet::new());
        desk.cooldowns_mut().set_remaining(&id, 1.0);
        let err = desk.assign(call_id, id.clone()).unwrap_err();
        assert_eq!(err.to_string(), "beacon cannot be assigned: CD: 1");

        desk.cooldowns_mut().clear(&id);
        desk.set_encounter(vec![Combatant {
            defeated: true,
            ..Combatant::character("beacon")
        }]);
        assert!(matches!(
            desk.assign(call_id, id),
            Err(DispatchError::ParticipantUnavailable { .. })
        ));
    }

    #[test]
    fn test_assign_unknown_participant() {
        let (mut desk, call_id, _) = desk_with_call(RequirementSet::new());
        assert!(matches!(
            desk.assign(call_id, ParticipantId::new("ghost")),
            Err(DispatchError::ParticipantNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_call() {
        let (mut desk, _, _) = desk_with_call(RequirementSet::new());
        let missing = CallId::new();
        assert!(matches!(desk.begin_dispatch(missing), Err(DispatchError::CallNotFound(_))));
        assert!(desk.reset(missing).is_err());
    }

    #[test]
    fn test_graph_labels_priority() {
        let (mut desk, call_id, id) = desk_with_call(RequirementSet::new().with(Label::Danger, 2));
        let nova = ParticipantId::new("nova");
        desk.add_character(nova.clone(), Character::new("Nova", LabelSet::from_values([0, 3, 0, 0, 0])));

        assert_eq!(desk.graph_labels(call_id, None).unwrap(), None);

        desk.assign(call_id, id.clone()).unwrap();
        assert_eq!(desk.graph_labels(call_id, None).unwrap(), Some(beacon().labels));
        assert_eq!(
            desk.graph_labels(call_id, Some(&nova)).unwrap(),
            Some(LabelSet::from_values([0, 3, 0, 0, 0]))
        );

        desk.begin_dispatch(call_id).unwrap();
        desk.settle(call_id).unwrap();
        // Settled graph ignores hover and later sheet edits
        desk.character_mut(&id).unwrap().labels.set(Label::Danger, -3);
        assert_eq!(desk.graph_labels(call_id, Some(&nova)).unwrap(), Some(beacon().labels));
    }

    #[test]
    fn test_overlay_and_rows_follow_session() {
        let requirements = RequirementSet::new()
            .with(Label::Danger, 2)
            .with(Label::Freak, 0)
            .with(Label::Savior, 1);
        let (mut desk, call_id, id) = desk_with_call(requirements);
        desk.assign(call_id, id).unwrap();

        let preset = desk.config().presets.call_sheet;
        let before = desk.overlay(call_id, None, &preset).unwrap();
        assert!(before.overlap.is_none());
        assert_eq!(before.verdict, Some(FitVerdict::Great));

        desk.begin_dispatch(call_id).unwrap();
        desk.settle(call_id).unwrap();
        let after = desk.overlay(call_id, None, &preset).unwrap();
        assert!(after.overlap.is_some());

        let rows = desk.label_rows(call_id, None).unwrap();
        assert!(rows.iter().all(|row| row.met));
    }
}
