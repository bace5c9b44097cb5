//! In-memory store for schedule entries.
//!
//! The store owns the authoritative sequence of entries and the rules for
//! changing it: id assignment on create, full field replacement on update,
//! and removal by id. Order is insertion order; nothing ever reorders it.
//! State is volatile, a fresh store starts empty (or with the two sample
//! entries) on every run.

use chrono::NaiveDate;

use crate::entry::{EntryPatch, NewEntry, ScheduleEntry};
use crate::error::{PlanError, PlanResult};

/// Ordered collection of schedule entries.
#[derive(Debug, Default)]
pub struct EventStore {
    entries: Vec<ScheduleEntry>,
    /// Monotonic id counter. Never reset, so ids stay unique across
    /// any add/remove sequence within a session.
    next_id: u64,
}

impl EventStore {
    pub fn new() -> EventStore {
        EventStore::default()
    }

    /// A store pre-populated with the two sample entries shown on first run.
    pub fn with_samples() -> EventStore {
        let mut store = EventStore::new();
        store.add(NewEntry {
            title: "Sample Event 1".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            end: None,
            description: None,
        });
        store.add(NewEntry {
            title: "Sample Event 2".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            end: None,
            description: None,
        });
        store
    }

    /// Append a new entry and assign it the next id.
    ///
    /// The caller guarantees a non-empty title. A missing `end` collapses
    /// the range to `start`; an inverted range is stored swapped. No
    /// duplicate-date or overlap checking happens here, entries may freely
    /// share days.
    pub fn add(&mut self, candidate: NewEntry) -> ScheduleEntry {
        self.next_id += 1;

        let (start, end) = ordered_range(candidate.start, candidate.end.unwrap_or(candidate.start));
        let entry = ScheduleEntry {
            id: self.next_id.to_string(),
            title: candidate.title,
            start,
            end,
            description: candidate.description,
        };

        self.entries.push(entry.clone());
        entry
    }

    /// Replace the fields of the entry with the matching id.
    ///
    /// `id` is immutable; `start`/`end` are carried over unless the patch
    /// supplies them. Returns the updated entry.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> PlanResult<ScheduleEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| PlanError::EntryNotFound(id.to_string()))?;

        let (start, end) = ordered_range(
            patch.start.unwrap_or(entry.start),
            patch.end.unwrap_or(entry.end),
        );

        entry.title = patch.title;
        entry.description = patch.description;
        entry.start = start;
        entry.end = end;

        Ok(entry.clone())
    }

    /// Remove the entry with the matching id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a date pair so that start <= end.
fn ordered_range(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if end < start { (end, start) } else { (start, end) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn candidate(title: &str, start: NaiveDate) -> NewEntry {
        NewEntry {
            title: title.to_string(),
            start,
            end: None,
            description: None,
        }
    }

    #[test]
    fn add_appends_and_assigns_sequential_ids() {
        let mut store = EventStore::new();
        let first = store.add(candidate("lunch", date(2024, 11, 1)));
        let second = store.add(candidate("dinner", date(2024, 11, 2)));

        assert_eq!(store.len(), 2);
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(store.entries()[0].title, "lunch");
    }

    #[test]
    fn add_defaults_missing_end_to_start() {
        let mut store = EventStore::new();
        let entry = store.add(candidate("lunch", date(2024, 11, 1)));
        assert_eq!(entry.start, entry.end);
    }

    #[test]
    fn add_stores_inverted_range_swapped() {
        let mut store = EventStore::new();
        let entry = store.add(NewEntry {
            title: "morning".to_string(),
            start: date(2024, 11, 5),
            end: Some(date(2024, 11, 2)),
            description: None,
        });
        assert_eq!(entry.start, date(2024, 11, 2));
        assert_eq!(entry.end, date(2024, 11, 5));
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        // The classic collision sequence: add three, delete the middle one,
        // add again. The counter must not reuse "3".
        let mut store = EventStore::new();
        store.add(candidate("morning", date(2024, 11, 1)));
        store.add(candidate("lunch", date(2024, 11, 2)));
        store.add(candidate("dinner", date(2024, 11, 3)));
        store.remove("2");
        let fresh = store.add(candidate("lunch", date(2024, 11, 4)));

        assert_eq!(fresh.id, "4");
        let mut ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn update_replaces_fields_and_preserves_id() {
        let mut store = EventStore::new();
        let entry = store.add(candidate("lunch", date(2024, 11, 1)));

        let updated = store
            .update(
                &entry.id,
                EntryPatch {
                    title: "dinner".to_string(),
                    description: Some("team sync".to_string()),
                    start: None,
                    end: None,
                },
            )
            .unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.title, "dinner");
        assert_eq!(updated.description.as_deref(), Some("team sync"));
        // Dates carried over untouched
        assert_eq!(updated.start, entry.start);
        assert_eq!(updated.end, entry.end);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_can_move_dates() {
        let mut store = EventStore::new();
        let entry = store.add(candidate("lunch", date(2024, 11, 1)));

        let updated = store
            .update(
                &entry.id,
                EntryPatch {
                    title: "lunch".to_string(),
                    description: None,
                    start: Some(date(2024, 11, 10)),
                    end: Some(date(2024, 11, 12)),
                },
            )
            .unwrap();

        assert_eq!(updated.start, date(2024, 11, 10));
        assert_eq!(updated.end, date(2024, 11, 12));
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let mut store = EventStore::new();
        let result = store.update(
            "99",
            EntryPatch {
                title: "lunch".to_string(),
                description: None,
                start: None,
                end: None,
            },
        );
        assert!(matches!(result, Err(PlanError::EntryNotFound(_))));
    }

    #[test]
    fn remove_deletes_exactly_one_and_keeps_order() {
        let mut store = EventStore::new();
        store.add(candidate("morning", date(2024, 11, 1)));
        store.add(candidate("lunch", date(2024, 11, 2)));
        store.add(candidate("dinner", date(2024, 11, 3)));

        store.remove("2");

        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["morning", "dinner"]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = EventStore::new();
        store.add(candidate("lunch", date(2024, 11, 1)));
        store.remove("99");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn with_samples_seeds_two_entries() {
        let store = EventStore::with_samples();
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].title, "Sample Event 1");
        assert_eq!(store.entries()[1].start, date(2024, 11, 5));
    }
}
