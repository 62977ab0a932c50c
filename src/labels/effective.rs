//! Effective label computation
//!
//! effective = clamp(base - 2 * condition + forward + ongoing, -3, 4)

use super::constants::{clamp_value, CONDITION_PENALTY};
use super::{Conditions, Label, LabelSet};
use serde::{Deserialize, Serialize};

/// Labels after conditions and global bonuses, plus what changed them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveLabels {
    pub labels: LabelSet,
    /// Labels penalized by a marked condition, in graph order
    pub affected: Vec<Label>,
    /// Sum of all condition penalties (positive number)
    pub total_penalty: i32,
    /// forward + ongoing
    pub global_bonus: i32,
    pub is_positive: bool,
    pub is_negative: bool,
}

impl EffectiveLabels {
    pub fn get(&self, label: Label) -> i32 {
        self.labels.get(label)
    }

    pub fn is_affected(&self, label: Label) -> bool {
        self.affected.contains(&label)
    }

    /// Compact tooltip with condition markers
    pub fn tooltip(&self) -> String {
        tooltip(&self.labels, &self.affected)
    }
}

/// Compute effective labels from a base set and its modifiers
pub fn compute_effective(
    base: &LabelSet,
    conditions: &Conditions,
    forward: i32,
    ongoing: i32,
) -> EffectiveLabels {
    let global_bonus = forward.saturating_add(ongoing);
    let mut labels = LabelSet::new();
    let mut affected = Vec::new();
    let mut total_penalty = 0;

    for (label, value) in base.iter() {
        let penalty = if conditions.penalizes(label) {
            affected.push(label);
            total_penalty += CONDITION_PENALTY;
            CONDITION_PENALTY
        } else {
            0
        };

        let raw = value as i64 - penalty as i64 + global_bonus as i64;
        labels.set(label, clamp_value(raw));
    }

    EffectiveLabels {
        labels,
        affected,
        total_penalty,
        global_bonus,
        is_positive: global_bonus >= 1,
        is_negative: total_penalty > global_bonus,
    }
}

/// `DAN: 2* | FRE: 0 | ...` in graph order, `*` on condition-affected labels
pub fn tooltip(labels: &LabelSet, affected: &[Label]) -> String {
    labels
        .iter()
        .map(|(label, value)| {
            let marker = if affected.contains(&label) { "*" } else { "" };
            format!("{}: {}{}", label.abbreviation(), value, marker)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `Danger: 2 | Freak: 0 | ...` as shown on the call sheet graph
pub fn long_tooltip(labels: &LabelSet) -> String {
    labels
        .iter()
        .map(|(label, value)| format!("{}: {}", label.display_name(), value))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Condition;

    fn beacon() -> LabelSet {
        LabelSet::new()
            .with(Label::Danger, 2)
            .with(Label::Freak, 0)
            .with(Label::Savior, 1)
            .with(Label::Superior, -1)
            .with(Label::Mundane, 1)
    }

    #[test]
    fn test_no_modifiers_passes_through() {
        let effective = compute_effective(&beacon(), &Conditions::none(), 0, 0);
        assert_eq!(effective.labels, beacon());
        assert!(effective.affected.is_empty());
        assert!(!effective.is_positive);
        assert!(!effective.is_negative);
    }

    #[test]
    fn test_condition_penalty() {
        let conditions = Conditions::none().marked(Condition::Afraid);
        let effective = compute_effective(&beacon(), &conditions, 0, 0);
        assert_eq!(effective.get(Label::Danger), 0);
        assert!(effective.is_affected(Label::Danger));
        assert!(!effective.is_affected(Label::Freak));
        assert_eq!(effective.total_penalty, 2);
        assert!(effective.is_negative);
    }

    #[test]
    fn test_guilty_clamps_at_min() {
        let conditions = Conditions::none().marked(Condition::Guilty);
        let effective = compute_effective(&beacon(), &conditions, 0, 0);
        assert_eq!(effective.get(Label::Superior), -3);
    }

    #[test]
    fn test_bonuses_apply_to_every_label() {
        let effective = compute_effective(&beacon(), &Conditions::none(), 2, 0);
        assert_eq!(effective.get(Label::Danger), 4);
        assert_eq!(effective.get(Label::Freak), 2);
        assert_eq!(effective.get(Label::Savior), 3);
        assert_eq!(effective.get(Label::Superior), 1);
        assert_eq!(effective.get(Label::Mundane), 3);
        assert!(effective.is_positive);
    }

    #[test]
    fn test_forward_and_ongoing_stack() {
        let effective = compute_effective(&beacon(), &Conditions::none(), 1, 1);
        assert_eq!(effective.global_bonus, 2);
        assert_eq!(effective.get(Label::Freak), 2);
    }

    #[test]
    fn test_negative_forward() {
        let effective = compute_effective(&beacon(), &Conditions::none(), -1, 0);
        assert_eq!(effective.global_bonus, -1);
        assert_eq!(effective.get(Label::Danger), 1);
    }

    #[test]
    fn test_bonus_covering_penalty_is_not_negative() {
        let conditions = Conditions::none().marked(Condition::Afraid);
        let effective = compute_effective(&beacon(), &conditions, 2, 0);
        assert!(!effective.is_negative);
    }

    #[test]
    fn test_all_conditions() {
        let effective = compute_effective(&beacon(), &Conditions::all(), 0, 0);
        assert_eq!(effective.affected.len(), 5);
        assert_eq!(effective.total_penalty, 10);
    }

    #[test]
    fn test_huge_bonuses_clamp() {
        let maxed = LabelSet::from_values([3; 5]);
        let effective = compute_effective(&maxed, &Conditions::none(), 5, 5);
        assert_eq!(effective.labels.values(), [4; 5]);

        let extreme = compute_effective(&maxed, &Conditions::none(), i32::MAX, i32::MAX);
        assert_eq!(extreme.labels.values(), [4; 5]);
    }

    #[test]
    fn test_tooltip_format() {
        let labels = LabelSet::from_values([2, 1, 0, 1, -1]);
        assert_eq!(
            tooltip(&labels, &[]),
            "DAN: 2 | FRE: 1 | SAV: 0 | MUN: 1 | SUP: -1"
        );
        assert_eq!(
            tooltip(&LabelSet::new(), &[Label::Danger, Label::Freak]),
            "DAN: 0* | FRE: 0* | SAV: 0 | MUN: 0 | SUP: 0"
        );
    }

    #[test]
    fn test_long_tooltip_format() {
        assert_eq!(
            long_tooltip(&beacon()),
            "Danger: 2 | Freak: 0 | Savior: 1 | Mundane: 1 | Superior: -1"
        );
    }
}
