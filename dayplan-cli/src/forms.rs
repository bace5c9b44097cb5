//! Terminal forms for the add and edit modals.
//!
//! Each form maps one-to-one onto session transitions: a prompt answer is
//! a field change, the final choice is confirm/delete/cancel. The forms
//! hold no state of their own; the session's `Mode` decides what is open
//! and when a form is done.

use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::Slot;
use dayplan_core::session::{Mode, Session};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

/// Run the add modal to completion (confirm or cancel).
pub fn run_add_form(session: &mut Session) -> Result<()> {
    let Mode::Adding(draft) = session.mode() else {
        return Ok(());
    };
    let start = draft.start;

    println!();
    println!("  Add entry on {}", start.format("%Y-%m-%d").bold());

    let slot = select_slot(None)?;
    session.set_title(slot.label());

    let description: String = Input::new()
        .with_prompt("  Notes? (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    session.set_description(&description);

    let end = prompt_date("  Last day?", start)?;
    session.set_end(end);

    let choice = Select::new()
        .with_prompt("  Confirm")
        .items(&["Add", "Cancel"])
        .default(0)
        .interact()?;

    if choice == 0 {
        if let Some(entry) = session.confirm_add() {
            println!(
                "{}",
                format!("  Added: {} on {}", entry.title, entry.start).green()
            );
        }
    } else {
        session.cancel();
        println!("{}", "  Cancelled".dimmed());
    }

    Ok(())
}

/// Run the edit modal until it closes (save, delete, or cancel).
pub fn run_edit_form(session: &mut Session) -> Result<()> {
    loop {
        let Mode::Editing(draft) = session.mode() else {
            return Ok(());
        };
        let (title, start, end, description) = (
            draft.title.clone(),
            draft.start,
            draft.end,
            draft.description.clone(),
        );

        println!();
        println!("  Edit: {} ({} to {})", title.bold(), start, end);
        if !description.is_empty() {
            println!("  {}", description.dimmed());
        }

        let choice = Select::new()
            .with_prompt("  Action")
            .items(&[
                "Change slot",
                "Edit notes",
                "Move days",
                "Save",
                "Delete",
                "Cancel",
            ])
            .default(3)
            .interact()?;

        match choice {
            0 => {
                let slot = select_slot(Some(&title))?;
                session.set_title(slot.label());
            }
            1 => {
                let notes: String = Input::new()
                    .with_prompt("  Notes")
                    .default(description)
                    .show_default(false)
                    .interact_text()?;
                session.set_description(&notes);
            }
            2 => {
                let new_start = prompt_date("  First day?", start)?;
                session.set_start(new_start);
                let new_end = prompt_date("  Last day?", end.max(new_start))?;
                session.set_end(new_end);
            }
            3 => {
                if let Some(updated) = session.confirm_edit() {
                    println!("{}", format!("  Saved: {}", updated.title).green());
                }
            }
            4 => {
                if session.delete().is_some() {
                    println!("{}", "  Deleted".red());
                }
            }
            _ => {
                session.cancel();
                println!("{}", "  Cancelled".dimmed());
            }
        }
    }
}

/// Slot selection control; the add and edit forms never take free text.
fn select_slot(current: Option<&str>) -> Result<Slot> {
    let labels: Vec<&str> = Slot::ALL.iter().map(|s| s.label()).collect();
    let default = current
        .and_then(|title| labels.iter().position(|l| *l == title))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Which slot?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Slot::ALL[choice])
}

/// Prompt for a date with retry on parse errors.
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.format("%Y-%m-%d").to_string())
            .interact_text()?;

        match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => {
                eprintln!(
                    "  {}",
                    format!("Invalid date '{}'. Expected YYYY-MM-DD", input).red()
                );
            }
        }
    }
}
