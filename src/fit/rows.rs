//! Per-axis comparison rows for the call sheet table

use super::RequirementSet;
use crate::labels::{Label, LabelSet};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    pub label: Label,
    pub requirement: Option<i32>,
    pub value: Option<i32>,
    /// value - requirement, only when both exist
    pub diff: Option<i32>,
    pub met: bool,
}

/// One row per label in graph order
///
/// Without a character every required axis reads as unmet.
pub fn label_rows(effective: Option<&LabelSet>, requirements: &RequirementSet) -> Vec<LabelRow> {
    Label::ALL
        .into_iter()
        .map(|label| {
            let requirement = requirements.get(label);
            let value = effective.map(|labels| labels.get(label));
            let diff = match (value, requirement) {
                (Some(v), Some(r)) => Some(v - r),
                _ => None,
            };
            let met = match (value, requirement) {
                (_, None) => true,
                (Some(v), Some(r)) => v >= r,
                (None, Some(_)) => false,
            };
            LabelRow {
                label,
                requirement,
                value,
                diff,
                met,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_with_character() {
        let requirements = RequirementSet::new().with(Label::Danger, 2).with(Label::Freak, 1);
        let labels = LabelSet::from_values([3, 0, 1, 1, -1]);
        let rows = label_rows(Some(&labels), &requirements);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].diff, Some(1));
        assert!(rows[0].met);
        assert_eq!(rows[1].diff, Some(-1));
        assert!(!rows[1].met);
        assert_eq!(rows[2].requirement, None);
        assert_eq!(rows[2].diff, None);
        assert!(rows[2].met);
    }

    #[test]
    fn test_rows_without_character() {
        let requirements = RequirementSet::new().with(Label::Savior, 0);
        let rows = label_rows(None, &requirements);
        assert!(rows[0].met);
        assert!(!rows[2].met);
        assert!(rows.iter().all(|row| row.value.is_none() && row.diff.is_none()));
    }
}
