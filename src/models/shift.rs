//! Shift model.
//!
//! A shift is one employee's scheduled work interval on a specific
//! calendar date. Shifts never span midnight; the interval is
//! half-open `[start, end)`, so shifts that merely touch endpoints do
//! not overlap.
//!
//! The morning/afternoon/evening classification is derived from the
//! start hour on demand rather than stored, so it cannot drift out
//! of sync when a shift is moved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// An employee's scheduled work interval on a specific date.
///
/// Invariant: `start < end`. Mutation boundaries
/// ([`ScheduleBoard`](crate::board::ScheduleBoard)) reject edits that
/// would violate it; the layout engine assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Owning employee. May dangle (employee deleted); rendering then
    /// degrades to a blank name rather than failing.
    pub employee_id: String,
    /// Calendar date the shift falls on.
    pub date: NaiveDate,
    /// Start time (inclusive).
    pub start: TimeOfDay,
    /// End time (exclusive). Always after `start`.
    pub end: TimeOfDay,
}

/// Daypart classification derived from a shift's start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    /// Starts before 12:00.
    Morning,
    /// Starts in 12:00..17:00.
    Afternoon,
    /// Starts at or after 17:00.
    Evening,
}

impl ShiftKind {
    /// Classifies a start time.
    pub fn of(start: TimeOfDay) -> Self {
        match start.hour() {
            0..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

impl Shift {
    /// Creates a new shift.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            start,
            end,
        }
    }

    /// Daypart classification of this shift.
    #[inline]
    pub fn kind(&self) -> ShiftKind {
        ShiftKind::of(self.start)
    }

    /// Shift length in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.start.minutes_until(self.end)
    }

    /// Whether two shifts overlap in time on the same date.
    ///
    /// Half-open semantics: a shift ending exactly when another starts
    /// does not overlap it.
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }
}
