//! Interactive planning session.
//!
//! Renders the month grid, reads one action at a time, and translates it
//! into the matching surface occurrence for the session: picking a day is
//! a date click, picking an entry is an entry click, moving an entry is a
//! drop. The forms module then drives the open modal to completion.

use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::ScheduleEntry;
use dayplan_core::config::PlanConfig;
use dayplan_core::session::Session;
use dayplan_core::store::EventStore;
use dayplan_core::surface::{
    ClickedEvent, DateClick, EventClick, EventDrop, display_entries,
};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::forms;
use crate::grid;
use crate::month::Month;

enum Action {
    Add,
    Open,
    Move,
    NextMonth,
    PrevMonth,
    Quit,
}

pub fn run(start_month: Month) -> Result<()> {
    let config = PlanConfig::load()?;
    let store = if config.seed_samples {
        EventStore::with_samples()
    } else {
        EventStore::new()
    };
    let options = config.calendar_options();

    let mut session = Session::new(store);
    let mut month = start_month;

    loop {
        let today = chrono::Local::now().date_naive();
        let entries = display_entries(session.store().entries());
        println!();
        println!("{}", grid::render(month, &entries, config.first_weekday, today));
        println!();

        match prompt_action(options.editable)? {
            Action::Add => {
                let day = prompt_day(month)?;
                session.date_click(DateClick {
                    date_str: day.format("%Y-%m-%d").to_string(),
                });
                forms::run_add_form(&mut session)?;
            }
            Action::Open => {
                if let Some(entry) = pick_entry(&session, month, "Open which entry?")? {
                    session.event_click(EventClick {
                        event: clicked(&entry),
                    });
                    forms::run_edit_form(&mut session)?;
                }
            }
            Action::Move => {
                if let Some(entry) = pick_entry(&session, month, "Move which entry?")? {
                    let new_start = forms::prompt_date("  Move to?", entry.start)?;
                    let moved = session.event_drop(drop_to(&entry, new_start));
                    if let Some(moved) = moved {
                        println!(
                            "{}",
                            format!("  Moved: {} to {}", moved.title, moved.start).green()
                        );
                    }
                }
            }
            Action::NextMonth => month = month.next(),
            Action::PrevMonth => month = month.prev(),
            Action::Quit => return Ok(()),
        }
    }
}

fn prompt_action(drag_enabled: bool) -> Result<Action> {
    let mut items: Vec<(&str, Action)> = vec![
        ("Add an entry", Action::Add),
        ("Open an entry", Action::Open),
    ];
    if drag_enabled {
        items.push(("Move an entry", Action::Move));
    }
    items.push(("Next month", Action::NextMonth));
    items.push(("Previous month", Action::PrevMonth));
    items.push(("Quit", Action::Quit));

    let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
    let choice = Select::new()
        .with_prompt("  What now?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(items.swap_remove(choice).1)
}

/// Prompt for a day of the rendered month.
fn prompt_day(month: Month) -> Result<NaiveDate> {
    loop {
        let day: u32 = Input::new()
            .with_prompt(format!("  Day of {}?", month.label()))
            .interact_text()?;

        match month.day(day) {
            Some(date) => return Ok(date),
            None => {
                eprintln!(
                    "  {}",
                    format!("{} has no day {}", month.label(), day).red()
                );
            }
        }
    }
}

/// Let the user pick one of the month's entries; None when there are none.
fn pick_entry(session: &Session, month: Month, prompt: &str) -> Result<Option<ScheduleEntry>> {
    let first = month.first_day();
    let next = month.next().first_day();
    let candidates: Vec<&ScheduleEntry> = session
        .store()
        .entries()
        .iter()
        .filter(|e| e.start < next && e.end >= first)
        .collect();

    if candidates.is_empty() {
        println!("  {}", "No entries this month".dimmed());
        return Ok(None);
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|e| format!("{}  {}", e.start, e.title))
        .collect();
    let choice = Select::new()
        .with_prompt(format!("  {}", prompt))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(candidates[choice].clone()))
}

/// The click payload a calendar surface reports for an entry.
fn clicked(entry: &ScheduleEntry) -> ClickedEvent {
    ClickedEvent {
        id: entry.id.clone(),
        title: entry.title.clone(),
        start: entry.start,
        end: if entry.is_single_day() {
            None
        } else {
            Some(entry.end)
        },
        description: entry.description.clone(),
    }
}

/// A drop occurrence that moves the entry, keeping its length.
fn drop_to(entry: &ScheduleEntry, new_start: NaiveDate) -> EventDrop {
    let length = entry.end.signed_duration_since(entry.start);
    EventDrop {
        id: entry.id.clone(),
        start: new_start,
        end: if entry.is_single_day() {
            None
        } else {
            Some(new_start + length)
        },
    }
}
