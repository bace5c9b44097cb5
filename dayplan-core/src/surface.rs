//! Calendar surface contract.
//!
//! A calendar surface renders the store's entries as a month grid and
//! reports user interactions back as occurrences. The types here are the
//! whole contract: the display model the surface consumes, and the
//! occurrence payloads it produces. The terminal grid in dayplan-cli is
//! one such surface; the `Serialize` derive on the display model lets a
//! non-terminal surface consume the same shape as JSON.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::ScheduleEntry;

/// One entry as handed to a calendar surface for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEntry {
    pub id: String,
    pub title: String,
    /// First day, formatted YYYY-MM-DD
    pub start: String,
    /// Last day, formatted YYYY-MM-DD; omitted for single-day entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DisplayEntry {
    pub fn from_entry(entry: &ScheduleEntry) -> DisplayEntry {
        DisplayEntry {
            id: entry.id.clone(),
            title: entry.title.clone(),
            start: entry.start.format("%Y-%m-%d").to_string(),
            end: if entry.is_single_day() {
                None
            } else {
                Some(entry.end.format("%Y-%m-%d").to_string())
            },
        }
    }
}

/// Map the store's sequence to the display model, preserving order.
pub fn display_entries(entries: &[ScheduleEntry]) -> Vec<DisplayEntry> {
    entries.iter().map(DisplayEntry::from_entry).collect()
}

/// Interaction switches a surface should honor when rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarOptions {
    /// Entries may be dragged to other days
    pub editable: bool,
    /// Entries may be dropped onto the grid
    pub droppable: bool,
}

/// The user clicked an empty day cell.
#[derive(Debug, Clone)]
pub struct DateClick {
    /// Clicked day, formatted YYYY-MM-DD
    pub date_str: String,
}

/// The user clicked a rendered entry.
#[derive(Debug, Clone)]
pub struct EventClick {
    pub event: ClickedEvent,
}

/// Payload of an entry click, as the surface reports it.
#[derive(Debug, Clone)]
pub struct ClickedEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    /// Missing on single-day entries
    pub end: Option<NaiveDate>,
    pub description: Option<String>,
}

/// The user dragged an entry to a new day (or resized its range).
#[derive(Debug, Clone)]
pub struct EventDrop {
    pub id: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}
