//! Monday-anchored calendar weeks.
//!
//! The scheduling grid and the weekly report both operate on one week
//! at a time. `Week` pins a week to its Monday and supports the
//! prev/next navigation and display label used by the week switcher.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A calendar week starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week {
    monday: NaiveDate,
}

impl Week {
    /// The week containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            monday: date.week(Weekday::Mon).first_day(),
        }
    }

    /// The week's Monday.
    #[inline]
    pub fn monday(self) -> NaiveDate {
        self.monday
    }

    /// The week's Sunday.
    #[inline]
    pub fn sunday(self) -> NaiveDate {
        self.monday + Days::new(6)
    }

    /// The previous week.
    pub fn prev(self) -> Self {
        Self {
            monday: self.monday - Days::new(7),
        }
    }

    /// The following week.
    pub fn next(self) -> Self {
        Self {
            monday: self.monday + Days::new(7),
        }
    }

    /// All seven dates, Monday through Sunday.
    pub fn days(self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.monday + Days::new(i as u64))
    }

    /// Whether a date falls inside this week.
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.monday && date <= self.sunday()
    }

    /// Display label, e.g. `"Jan 15 - Jan 21, 2024"`.
    pub fn label(self) -> String {
        let sunday = self.sunday();
        format!(
            "{} {} - {} {}, {}",
            self.monday.format("%b"),
            self.monday.day(),
            sunday.format("%b"),
            sunday.day(),
            sunday.year()
        )
    }
}
