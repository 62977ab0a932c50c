//! Sparse per-axis requirement thresholds

use crate::labels::{clamp_value, Label};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Optional threshold per label, each clamped into [-3, 4]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequirementSet {
    thresholds: [Option<i32>; 5],
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loosely keyed input; unknown axis names are ignored
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<i64>)>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            match key.parse::<Label>() {
                Ok(label) => set.thresholds[label.index()] = value.map(clamp_value),
                Err(err) => tracing::debug!("Ignoring requirement: {}", err),
            }
        }
        set
    }

    /// Builder-style setter
    pub fn with(mut self, label: Label, threshold: i32) -> Self {
        self.set(label, Some(threshold));
        self
    }

    pub fn get(&self, label: Label) -> Option<i32> {
        self.thresholds[label.index()]
    }

    pub fn set(&mut self, label: Label, threshold: Option<i32>) {
        self.thresholds[label.index()] = threshold.map(|t| clamp_value(t as i64));
    }

    pub fn is_required(&self, label: Label) -> bool {
        self.get(label).is_some()
    }

    /// Number of axes with a threshold
    pub fn len(&self) -> usize {
        self.thresholds.iter().filter(|t| t.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Required axes with their thresholds, in graph order
    pub fn iter(&self) -> impl Iterator<Item = (Label, i32)> + '_ {
        Label::ALL
            .into_iter()
            .filter_map(move |label| self.get(label).map(|t| (label, t)))
    }

    pub fn labels(&self) -> Vec<Label> {
        self.iter().map(|(label, _)| label).collect()
    }
}

impl Serialize for RequirementSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, Option<i32>> = Label::ALL
            .into_iter()
            .map(|label| (label.key(), self.get(label)))
            .collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RequirementSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, Option<i64>> = BTreeMap::deserialize(deserializer)?;
        Ok(Self::from_pairs(raw.iter().map(|(k, v)| (k.as_str(), *v))))
    }
}
