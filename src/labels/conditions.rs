//! Conditions: each marked condition penalizes exactly one label

use super::Label;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Afraid,
    Angry,
    Guilty,
    Hopeless,
    Insecure,
}

impl Condition {
    /// All conditions in sheet order
    pub const ALL: [Condition; 5] = [
        Condition::Afraid,
        Condition::Angry,
        Condition::Guilty,
        Condition::Hopeless,
        Condition::Insecure,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Condition::Afraid => "afraid",
            Condition::Angry => "angry",
            Condition::Guilty => "guilty",
            Condition::Hopeless => "hopeless",
            Condition::Insecure => "insecure",
        }
    }

    /// Case-insensitive lookup by key
    pub fn from_key(key: &str) -> Option<Condition> {
        let normalized = key.trim().to_ascii_lowercase();
        Condition::ALL.into_iter().find(|c| c.key() == normalized)
    }

    /// The label this condition penalizes
    pub fn label(self) -> Label {
        match self {
            Condition::Afraid => Label::Danger,
            Condition::Angry => Label::Mundane,
            Condition::Guilty => Label::Superior,
            Condition::Hopeless => Label::Freak,
            Condition::Insecure => Label::Savior,
        }
    }

    /// The condition that penalizes `label`
    pub fn for_label(label: Label) -> Condition {
        match label {
            Label::Danger => Condition::Afraid,
            Label::Mundane => Condition::Angry,
            Label::Superior => Condition::Guilty,
            Label::Freak => Condition::Hopeless,
            Label::Savior => Condition::Insecure,
        }
    }
}

/// Marked/unmarked state of the five conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub afraid: bool,
    pub angry: bool,
    pub guilty: bool,
    pub hopeless: bool,
    pub insecure: bool,
}

impl Conditions {
    /// No conditions marked
    pub fn none() -> Self {
        Self::default()
    }

    /// Every condition marked
    pub fn all() -> Self {
        Self {
            afraid: true,
            angry: true,
            guilty: true,
            hopeless: true,
            insecure: true,
        }
    }

    /// Builder-style marker
    pub fn marked(mut self, condition: Condition) -> Self {
        self.set(condition, true);
        self
    }

    pub fn is_marked(&self, condition: Condition) -> bool {
        match condition {
            Condition::Afraid => self.afraid,
            Condition::Angry => self.angry,
            Condition::Guilty => self.guilty,
            Condition::Hopeless => self.hopeless,
            Condition::Insecure => self.insecure,
        }
    }

    pub fn set(&mut self, condition: Condition, marked: bool) {
        match condition {
            Condition::Afraid => self.afraid = marked,
            Condition::Angry => self.angry = marked,
            Condition::Guilty => self.guilty = marked,
            Condition::Hopeless => self.hopeless = marked,
            Condition::Insecure => self.insecure = marked,
        }
    }

    /// Whether the condition tied to `label` is marked
    pub fn penalizes(&self, label: Label) -> bool {
        self.is_marked(Condition::for_label(label))
    }

    pub fn count(&self) -> usize {
        Condition::ALL.iter().filter(|c| self.is_marked(**c)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_label_mapping() {
        assert_eq!(Condition::Afraid.label(), Label::Danger);
        assert_eq!(Condition::Angry.label(), Label::Mundane);
        assert_eq!(Condition::Guilty.label(), Label::Superior);
        assert_eq!(Condition::Hopeless.label(), Label::Freak);
        assert_eq!(Condition::Insecure.label(), Label::Savior);
    }

    #[test]
    fn test_mapping_is_bijective() {
        for condition in Condition::ALL {
            assert_eq!(Condition::for_label(condition.label()), condition);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Condition::from_key(" Hopeless"), Some(Condition::Hopeless));
        assert_eq!(Condition::from_key("bored"), None);
    }

    #[test]
    fn test_penalizes() {
        let conditions = Conditions::none().marked(Condition::Afraid);
        assert!(conditions.penalizes(Label::Danger));
        assert!(!conditions.penalizes(Label::Freak));
        assert_eq!(conditions.count(), 1);
        assert_eq!(Conditions::all().count(), 5);
    }
}
