//! Fit classification: how well a character's labels meet a call's requirements

pub mod requirements;
pub mod rows;

pub use requirements::RequirementSet;
pub use rows::{label_rows, LabelRow};

use crate::labels::LabelSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier fit verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitVerdict {
    Great,
    Good,
    Poor,
}

impl FitVerdict {
    /// Change applied to forward when this verdict settles
    pub fn resource_delta(self) -> i32 {
        match self {
            FitVerdict::Great => 1,
            FitVerdict::Good => 0,
            FitVerdict::Poor => -1,
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            FitVerdict::Great => "Great Fit",
            FitVerdict::Good => "Good Fit",
            FitVerdict::Poor => "Poor Fit",
        }
    }

    /// Phrase used in settlement summaries ("is a great fit")
    pub fn phrase(self) -> &'static str {
        match self {
            FitVerdict::Great => "great fit",
            FitVerdict::Good => "decent fit",
            FitVerdict::Poor => "poor fit",
        }
    }

    /// Style key for the host's css classes
    pub fn css_key(self) -> &'static str {
        match self {
            FitVerdict::Great => "great",
            FitVerdict::Good => "decent",
            FitVerdict::Poor => "poor",
        }
    }
}

impl fmt::Display for FitVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            FitVerdict::Great => "great",
            FitVerdict::Good => "good",
            FitVerdict::Poor => "poor",
        };
        f.write_str(key)
    }
}

/// Classify effective labels against a requirement set
///
/// No requirements, or all met: great. Two or more met but not all: good.
/// Anything else is poor, so one or two requirements can never be good.
pub fn classify_fit(effective: &LabelSet, requirements: &RequirementSet) -> FitVerdict {
    let required = requirements.len();
    if required == 0 {
        return FitVerdict::Great;
    }

    let met = requirements
        .iter()
        .filter(|(label, threshold)| effective.get(*label) >= *threshold)
        .count();

    if met == required {
        FitVerdict::Great
    } else if met >= 2 {
        FitVerdict::Good
    } else {
        FitVerdict::Poor
    }
}
