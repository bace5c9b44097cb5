//! Month grid rendering for the terminal calendar surface.
//!
//! Consumes the display model from dayplan-core and renders it as a
//! colored month grid: weekday header, one cell per day, and a listing of
//! the month's entries below the grid. Days carrying entries are green,
//! today is highlighted.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use dayplan_core::config::FirstWeekday;
use dayplan_core::surface::DisplayEntry;
use owo_colors::OwoColorize;

use crate::month::Month;

/// An entry with its dates parsed back out of the display model.
struct GridEntry<'a> {
    entry: &'a DisplayEntry,
    start: NaiveDate,
    end: NaiveDate,
}

impl<'a> GridEntry<'a> {
    fn parse(entry: &'a DisplayEntry) -> Option<GridEntry<'a>> {
        let start = NaiveDate::parse_from_str(&entry.start, "%Y-%m-%d").ok()?;
        let end = match &entry.end {
            Some(end) => NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?,
            None => start,
        };
        Some(GridEntry { entry, start, end })
    }

    fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    fn overlaps_month(&self, month: Month) -> bool {
        let first = month.first_day();
        let last = month.next().first_day().pred_opt().unwrap_or(first);
        self.start <= last && first <= self.end
    }
}

/// Render one month of the planner as terminal text.
pub fn render(
    month: Month,
    entries: &[DisplayEntry],
    first_weekday: FirstWeekday,
    today: NaiveDate,
) -> String {
    let parsed: Vec<GridEntry> = entries.iter().filter_map(GridEntry::parse).collect();
    let marked = marked_days(month, &parsed);

    let mut lines = Vec::new();
    lines.push(format!("  {}", month.label().bold()));
    lines.push(format!("  {}", weekday_header(first_weekday).dimmed()));

    for week in week_rows(month, first_weekday) {
        let mut cells = Vec::new();
        for slot in week {
            match slot {
                Some(day) => {
                    let date = month.day(day);
                    let cell = format!("{:>3}", day);
                    if date == Some(today) {
                        cells.push(cell.cyan().bold().to_string());
                    } else if marked.contains(&day) {
                        cells.push(cell.green().to_string());
                    } else {
                        cells.push(cell);
                    }
                }
                None => cells.push("   ".to_string()),
            }
        }
        lines.push(format!("  {}", cells.join(" ")));
    }

    let listed: Vec<&GridEntry> = parsed.iter().filter(|g| g.overlaps_month(month)).collect();
    if !listed.is_empty() {
        lines.push(String::new());
        for grid_entry in listed {
            lines.push(format!("  {}", render_entry_line(grid_entry)));
        }
    }

    lines.join("\n")
}

fn render_entry_line(grid_entry: &GridEntry) -> String {
    let entry = grid_entry.entry;
    let when = match &entry.end {
        Some(end) => format!("{} to {}", entry.start, end),
        None => entry.start.clone(),
    };
    format!(
        "[{}] {}  {}",
        entry.id.dimmed(),
        when,
        entry.title.green()
    )
}

fn weekday_header(first_weekday: FirstWeekday) -> String {
    let names = match first_weekday {
        FirstWeekday::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        FirstWeekday::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    };
    names.map(|n| format!("{:>3}", n)).join(" ")
}

/// Days of the month that carry at least one entry.
fn marked_days(month: Month, entries: &[GridEntry]) -> BTreeSet<u32> {
    let mut days = BTreeSet::new();
    for day in 1..=month.num_days() {
        if let Some(date) = month.day(day) {
            if entries.iter().any(|g| g.covers(date)) {
                days.insert(day);
            }
        }
    }
    days
}

/// Lay the month's days out in week rows; `None` pads the edges.
fn week_rows(month: Month, first_weekday: FirstWeekday) -> Vec<Vec<Option<u32>>> {
    let mut slots: Vec<Option<u32>> = vec![None; leading_blanks(month, first_weekday)];
    slots.extend((1..=month.num_days()).map(Some));
    while slots.len() % 7 != 0 {
        slots.push(None);
    }

    slots.chunks(7).map(|chunk| chunk.to_vec()).collect()
}

fn leading_blanks(month: Month, first_weekday: FirstWeekday) -> usize {
    let weekday = month.first_day().weekday();
    match first_weekday {
        FirstWeekday::Sunday => weekday.num_days_from_sunday() as usize,
        FirstWeekday::Monday => weekday.num_days_from_monday() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nov() -> Month {
        Month { year: 2024, month: 11 }
    }

    fn display(id: &str, start: &str, end: Option<&str>) -> DisplayEntry {
        DisplayEntry {
            id: id.to_string(),
            title: "lunch".to_string(),
            start: start.to_string(),
            end: end.map(String::from),
        }
    }

    #[test]
    fn leading_blanks_depend_on_first_weekday() {
        // 2024-11-01 is a Friday
        assert_eq!(leading_blanks(nov(), FirstWeekday::Sunday), 5);
        assert_eq!(leading_blanks(nov(), FirstWeekday::Monday), 4);
    }

    #[test]
    fn week_rows_cover_every_day_exactly_once() {
        let rows = week_rows(nov(), FirstWeekday::Sunday);
        let days: Vec<u32> = rows.iter().flatten().filter_map(|s| *s).collect();
        assert_eq!(days, (1..=30).collect::<Vec<u32>>());
        assert!(rows.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn ranged_entry_marks_every_covered_day() {
        let entries = vec![display("1", "2024-11-02", Some("2024-11-04"))];
        let parsed: Vec<GridEntry> = entries.iter().filter_map(GridEntry::parse).collect();
        let marked = marked_days(nov(), &parsed);
        assert_eq!(marked.into_iter().collect::<Vec<u32>>(), vec![2, 3, 4]);
    }

    #[test]
    fn listing_only_shows_the_rendered_month() {
        let entries = vec![
            display("1", "2024-11-02", None),
            display("2", "2024-12-25", None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        let out = render(nov(), &entries, FirstWeekday::Sunday, today);
        assert!(out.contains("2024-11-02"));
        assert!(!out.contains("2024-12-25"));
    }
}
