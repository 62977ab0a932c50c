//! A dispatchable character as the engine sees it

use super::{compute_effective, Conditions, EffectiveLabels, LabelSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub labels: LabelSet,
    #[serde(default)]
    pub conditions: Conditions,
    /// Bounded resource adjusted by dispatch outcomes
    #[serde(default)]
    pub forward: i32,
    #[serde(default)]
    pub ongoing: i32,
}

impl Character {
    pub fn new(name: impl Into<String>, labels: LabelSet) -> Self {
        Self {
            name: name.into(),
            labels,
            conditions: Conditions::none(),
            forward: 0,
            ongoing: 0,
        }
    }

    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_forward(mut self, forward: i32) -> Self {
        self.forward = forward;
        self
    }

    pub fn with_ongoing(mut self, ongoing: i32) -> Self {
        self.ongoing = ongoing;
        self
    }

    pub fn effective(&self) -> EffectiveLabels {
        compute_effective(&self.labels, &self.conditions, self.forward, self.ongoing)
    }
}
