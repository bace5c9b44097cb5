//! Schedule entry types.
//!
//! These types represent the planner's in-memory schedule entries.
//! The store owns `ScheduleEntry` records; `NewEntry` and `EntryPatch`
//! are the candidate shapes accepted by its create/update operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One schedule entry on the planner calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique within the store, immutable once assigned
    pub id: String,
    pub title: String,
    /// First day of the entry
    pub start: NaiveDate,
    /// Last day of the entry; equals `start` for single-day entries
    pub end: NaiveDate,
    pub description: Option<String>,
}

impl ScheduleEntry {
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

/// Candidate for a new entry, before the store has assigned an id.
///
/// A missing `end` collapses the range to `start`.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Replacement fields for an existing entry.
///
/// `title` and `description` are always replaced; `start`/`end` only when
/// supplied, otherwise the stored dates are carried over.
#[derive(Debug, Clone)]
pub struct EntryPatch {
    pub title: String,
    pub description: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// The fixed set of titles the planner forms offer.
///
/// Entries store the title as plain text; the forms constrain the choice
/// to these three slots instead of free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Morning,
    Lunch,
    Dinner,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Morning, Slot::Lunch, Slot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Morning => "morning",
            Slot::Lunch => "lunch",
            Slot::Dinner => "dinner",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_when_range_collapses() {
        let day = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let entry = ScheduleEntry {
            id: "1".to_string(),
            title: "lunch".to_string(),
            start: day,
            end: day,
            description: None,
        };
        assert!(entry.is_single_day());
    }

    #[test]
    fn slot_labels() {
        let labels: Vec<&str> = Slot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["morning", "lunch", "dinner"]);
    }
}
