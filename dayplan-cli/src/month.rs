//! Calendar month arithmetic for the grid views.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

/// One calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn containing(date: NaiveDate) -> Month {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse "YYYY-MM".
    pub fn parse(s: &str) -> Result<Month> {
        let parsed = s
            .split_once('-')
            .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
            .filter(|(_, m)| (1..=12).contains(m));

        match parsed {
            Some((year, month)) => Ok(Month { year, month }),
            None => anyhow::bail!("Invalid month '{}'. Expected YYYY-MM", s),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month is only constructed with a validated month number
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn num_days(&self) -> u32 {
        let first = self.first_day();
        let next = self.next().first_day();
        next.signed_duration_since(first).num_days() as u32
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn next(&self) -> Month {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Month {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Display label, e.g. "November 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}
