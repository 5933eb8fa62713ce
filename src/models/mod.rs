//! Scheduling domain models.
//!
//! Core data types for the staff-scheduling board: employees, their
//! shifts, minute-granularity times, and Monday-anchored weeks.
//!
//! Layout entries ([`SlotLayout`](crate::layout::SlotLayout)) are not
//! models: they are ephemeral values recomputed from a day's shifts
//! and live in the [`layout`](crate::layout) module.

mod employee;
mod shift;
mod time;
mod week;

pub use employee::{initials, Employee, Role};
pub use shift::{Shift, ShiftKind};
pub use time::{ParseTimeError, TimeOfDay, MINUTES_PER_DAY};
pub use week::Week;
