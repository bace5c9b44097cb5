//! Two-modal interaction flow for the planner view.
//!
//! `Session` sits between a calendar surface and the event store. Surface
//! occurrences (day click, entry click, drag) come in, the session keeps
//! the transient draft for whichever modal is open, and a confirmed form
//! turns into exactly one store operation. Modal visibility is the single
//! tagged `Mode`: only one modal can ever be open.
//!
//! Guard failures are silent. A confirm with a missing title does nothing
//! and leaves the modal open with the draft intact; the surface decides
//! whether to surface that to the user.

use chrono::NaiveDate;

use crate::entry::{EntryPatch, NewEntry, ScheduleEntry};
use crate::store::EventStore;
use crate::surface::{DateClick, EventClick, EventDrop};

/// Which modal is open, with its draft. `Idle` means neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Idle,
    Adding(AddDraft),
    Editing(EditDraft),
}

/// Unsaved fields of the add modal.
#[derive(Debug, Clone, PartialEq)]
pub struct AddDraft {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub title: String,
    pub description: String,
}

/// Unsaved fields of the edit modal, seeded from the clicked entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    /// Id of the entry being edited; never changed by the form
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Drives the add and edit modals over an owned event store.
#[derive(Debug)]
pub struct Session {
    store: EventStore,
    mode: Mode,
}

impl Session {
    pub fn new(store: EventStore) -> Session {
        Session {
            store,
            mode: Mode::Idle,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, Mode::Idle)
    }

    /// Day click: open the add modal with the range collapsed to that day.
    ///
    /// Ignored while a modal is open, and for a date string that does not
    /// parse as YYYY-MM-DD.
    pub fn date_click(&mut self, click: DateClick) {
        if !self.is_idle() {
            return;
        }
        let Ok(day) = NaiveDate::parse_from_str(&click.date_str, "%Y-%m-%d") else {
            return;
        };

        self.mode = Mode::Adding(AddDraft {
            start: day,
            end: day,
            title: String::new(),
            description: String::new(),
        });
    }

    /// Entry click: open the edit modal seeded from the clicked entry.
    ///
    /// The payload's fields are copied into the draft here, as part of the
    /// transition; a missing `end` collapses to `start`. Ignored while a
    /// modal is open.
    pub fn event_click(&mut self, click: EventClick) {
        if !self.is_idle() {
            return;
        }
        let event = click.event;

        self.mode = Mode::Editing(EditDraft {
            id: event.id,
            title: event.title,
            description: event.description.unwrap_or_default(),
            start: event.start,
            end: event.end.unwrap_or(event.start),
        });
    }

    /// Drag completed: move the entry's dates. Unknown ids are a no-op.
    ///
    /// Only handled while idle; a drag cannot happen under an open modal.
    pub fn event_drop(&mut self, drop: EventDrop) -> Option<ScheduleEntry> {
        if !self.is_idle() {
            return None;
        }
        let current = self.store.get(&drop.id)?;

        let patch = EntryPatch {
            title: current.title.clone(),
            description: current.description.clone(),
            start: Some(drop.start),
            end: Some(drop.end.unwrap_or(drop.start)),
        };
        self.store.update(&drop.id, patch).ok()
    }

    pub fn set_title(&mut self, title: &str) {
        match &mut self.mode {
            Mode::Adding(draft) => draft.title = title.to_string(),
            Mode::Editing(draft) => draft.title = title.to_string(),
            Mode::Idle => {}
        }
    }

    pub fn set_description(&mut self, description: &str) {
        match &mut self.mode {
            Mode::Adding(draft) => draft.description = description.to_string(),
            Mode::Editing(draft) => draft.description = description.to_string(),
            Mode::Idle => {}
        }
    }

    pub fn set_start(&mut self, start: NaiveDate) {
        match &mut self.mode {
            Mode::Adding(draft) => draft.start = start,
            Mode::Editing(draft) => draft.start = start,
            Mode::Idle => {}
        }
    }

    pub fn set_end(&mut self, end: NaiveDate) {
        match &mut self.mode {
            Mode::Adding(draft) => draft.end = end,
            Mode::Editing(draft) => draft.end = end,
            Mode::Idle => {}
        }
    }

    /// Confirm the add modal.
    ///
    /// Guard: title present (the draft's dates are present by construction).
    /// On success the entry is created and the modal closes; on guard
    /// failure nothing happens and the modal stays open.
    pub fn confirm_add(&mut self) -> Option<ScheduleEntry> {
        let Mode::Adding(draft) = &self.mode else {
            return None;
        };
        if draft.title.is_empty() {
            return None;
        }

        let entry = self.store.add(NewEntry {
            title: draft.title.clone(),
            start: draft.start,
            end: Some(draft.end),
            description: none_if_empty(&draft.description),
        });
        self.mode = Mode::Idle;
        Some(entry)
    }

    /// Confirm the edit modal.
    ///
    /// Guard: title present. The full draft is written back, including
    /// re-picked dates. If the entry has vanished from the store the modal
    /// still closes; there is nothing left to edit.
    pub fn confirm_edit(&mut self) -> Option<ScheduleEntry> {
        let Mode::Editing(draft) = &self.mode else {
            return None;
        };
        if draft.title.is_empty() {
            return None;
        }

        let patch = EntryPatch {
            title: draft.title.clone(),
            description: none_if_empty(&draft.description),
            start: Some(draft.start),
            end: Some(draft.end),
        };
        let updated = self.store.update(&draft.id, patch).ok();
        self.mode = Mode::Idle;
        updated
    }

    /// Delete the entry under edit and close the modal.
    pub fn delete(&mut self) -> Option<String> {
        let Mode::Editing(draft) = &self.mode else {
            return None;
        };
        let id = draft.id.clone();

        self.store.remove(&id);
        self.mode = Mode::Idle;
        Some(id)
    }

    /// Close the open modal and drop its draft. The store is untouched.
    ///
    /// Serves both the cancel button and an overlay dismiss.
    pub fn cancel(&mut self) {
        self.mode = Mode::Idle;
    }
}

fn none_if_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
