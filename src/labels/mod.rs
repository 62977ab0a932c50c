//! Masks labels: the five opposed personality axes
//!
//! Axis order is fixed and drives vertex placement on the graph:
//! danger (top), freak (top right), savior (bottom right),
//! mundane (bottom left), superior (top left).

pub mod character;
pub mod conditions;
pub mod constants;
pub mod effective;

pub use character::Character;
pub use conditions::{Condition, Conditions};
pub use constants::{clamp_value, MAX_VALUE, MIN_VALUE, VALUE_RANGE};
pub use effective::{compute_effective, long_tooltip, tooltip, EffectiveLabels};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five label axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Danger,
    Freak,
    Savior,
    Mundane,
    Superior,
}

impl Label {
    /// All labels in graph order
    pub const ALL: [Label; 5] = [
        Label::Danger,
        Label::Freak,
        Label::Savior,
        Label::Mundane,
        Label::Superior,
    ];

    /// Position of this label around the pentagon (0 = top)
    pub fn index(self) -> usize {
        match self {
            Label::Danger => 0,
            Label::Freak => 1,
            Label::Savior => 2,
            Label::Mundane => 3,
            Label::Superior => 4,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Label::Danger => "danger",
            Label::Freak => "freak",
            Label::Savior => "savior",
            Label::Mundane => "mundane",
            Label::Superior => "superior",
        }
    }

    /// Three-letter abbreviation used in compact tooltips
    pub fn abbreviation(self) -> &'static str {
        match self {
            Label::Danger => "DAN",
            Label::Freak => "FRE",
            Label::Savior => "SAV",
            Label::Mundane => "MUN",
            Label::Superior => "SUP",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Label::Danger => "Danger",
            Label::Freak => "Freak",
            Label::Savior => "Savior",
            Label::Mundane => "Mundane",
            Label::Superior => "Superior",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a name does not match any of the five axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label: {}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Label::ALL
            .into_iter()
            .find(|label| label.key() == normalized)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Values for all five labels, each kept inside [-3, 4]
///
/// Missing axes deserialize as 0; out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawLabelSet")]
pub struct LabelSet {
    danger: i32,
    freak: i32,
    savior: i32,
    mundane: i32,
    superior: i32,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawLabelSet {
    danger: i64,
    freak: i64,
    savior: i64,
    mundane: i64,
    superior: i64,
}

impl From<RawLabelSet> for LabelSet {
    fn from(raw: RawLabelSet) -> Self {
        Self {
            danger: clamp_value(raw.danger),
            freak: clamp_value(raw.freak),
            savior: clamp_value(raw.savior),
            mundane: clamp_value(raw.mundane),
            superior: clamp_value(raw.superior),
        }
    }
}

impl LabelSet {
    /// All labels at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from values in graph order (danger, freak, savior, mundane, superior)
    pub fn from_values(values: [i32; 5]) -> Self {
        let mut set = Self::new();
        for (label, value) in Label::ALL.into_iter().zip(values) {
            set.set(label, value);
        }
        set
    }

    /// Builder-style setter
    pub fn with(mut self, label: Label, value: i32) -> Self {
        self.set(label, value);
        self
    }

    pub fn get(&self, label: Label) -> i32 {
        match label {
            Label::Danger => self.danger,
            Label::Freak => self.freak,
            Label::Savior => self.savior,
            Label::Mundane => self.mundane,
            Label::Superior => self.superior,
        }
    }

    /// Set a label, clamping into the value space
    pub fn set(&mut self, label: Label, value: i32) {
        let value = clamp_value(value as i64);
        match label {
            Label::Danger => self.danger = value,
            Label::Freak => self.freak = value,
            Label::Savior => self.savior = value,
            Label::Mundane => self.mundane = value,
            Label::Superior => self.superior = value,
        }
    }

    /// Values in graph order
    pub fn values(&self) -> [i32; 5] {
        Label::ALL.map(|label| self.get(label))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, i32)> + '_ {
        Label::ALL.into_iter().map(move |label| (label, self.get(label)))
    }

    /// Raise `up` by one and lower `down` by one
    ///
    /// Refused (returns false, nothing changes) when both are the same label,
    /// `up` is already at the editable maximum or `down` at the editable minimum.
    pub fn shift(&mut self, up: Label, down: Label) -> bool {
        if up == down {
            return false;
        }

        let up_value = self.get(up);
        let down_value = self.get(down);
        if up_value >= constants::SHIFT_MAX || down_value <= constants::SHIFT_MIN {
            return false;
        }

        self.set(up, up_value + 1);
        self.set(down, down_value - 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order() {
        let keys: Vec<&str> = Label::ALL.iter().map(|l| l.key()).collect();
        assert_eq!(keys, vec!["danger", "freak", "savior", "mundane", "superior"]);
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(Label::Danger.abbreviation(), "DAN");
        assert_eq!(Label::Freak.abbreviation(), "FRE");
        assert_eq!(Label::Savior.abbreviation(), "SAV");
        assert_eq!(Label::Mundane.abbreviation(), "MUN");
        assert_eq!(Label::Superior.abbreviation(), "SUP");
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("danger".parse::<Label>(), Ok(Label::Danger));
        assert_eq!(" Superior ".parse::<Label>(), Ok(Label::Superior));
        assert!("soldier".parse::<Label>().is_err());
    }

    #[test]
    fn test_set_clamps() {
        let mut set = LabelSet::new();
        set.set(Label::Danger, 9);
        set.set(Label::Freak, -7);
        assert_eq!(set.get(Label::Danger), 4);
        assert_eq!(set.get(Label::Freak), -3);
    }

    #[test]
    fn test_deserialize_defaults_missing_and_clamps() {
        let set: LabelSet = serde_json::from_str(r#"{"danger": 2, "freak": 12}"#).unwrap();
        assert_eq!(set.get(Label::Danger), 2);
        assert_eq!(set.get(Label::Freak), 4);
        assert_eq!(set.get(Label::Savior), 0);
        assert_eq!(set.get(Label::Mundane), 0);
    }

    #[test]
    fn test_from_values_uses_graph_order() {
        let set = LabelSet::from_values([2, 0, 1, 1, -1]);
        assert_eq!(set.get(Label::Mundane), 1);
        assert_eq!(set.get(Label::Superior), -1);
        assert_eq!(set.values(), [2, 0, 1, 1, -1]);
    }

    #[test]
    fn test_shift_moves_both_labels() {
        let mut set = LabelSet::new();
        assert!(set.shift(Label::Danger, Label::Freak));
        assert_eq!(set.get(Label::Danger), 1);
        assert_eq!(set.get(Label::Freak), -1);
    }

    #[test]
    fn test_shift_refused_at_bounds() {
        let mut at_max = LabelSet::new().with(Label::Danger, 3);
        assert!(!at_max.shift(Label::Danger, Label::Freak));
        assert_eq!(at_max.get(Label::Freak), 0);

        let mut at_min = LabelSet::new().with(Label::Freak, -2);
        assert!(!at_min.shift(Label::Danger, Label::Freak));
        assert_eq!(at_min.get(Label::Danger), 0);

        let mut same = LabelSet::new();
        assert!(!same.shift(Label::Savior, Label::Savior));
    }
}
