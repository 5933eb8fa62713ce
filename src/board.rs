//! The schedule board: shift and employee state with explicit
//! transitions.
//!
//! `ScheduleBoard` is the single writer for the in-memory shift set.
//! Every mutation is a discrete transition returning
//! `Result<_, BoardError>`; there is no provisional state inside the
//! board itself. Drag previews live in
//! [`DragSession`](crate::drag::DragSession) and only reach the board
//! through [`apply_move`](ScheduleBoard::apply_move) when a drag
//! commits.
//!
//! Rendering lookups degrade gracefully: a shift whose employee no
//! longer exists displays a blank name instead of failing. Day
//! layouts are recomputed from the current shift set on every call,
//! never cached, so a stale layout can never be rendered against a
//! mutated set.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::grid::DayGrid;
use crate::layout::{compute_day_layout, SlotLayout};
use crate::models::{Employee, Role, Shift, TimeOfDay};

/// Error from a board state transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The referenced shift does not exist.
    #[error("shift '{0}' does not exist")]
    UnknownShift(String),
    /// The referenced employee does not exist.
    #[error("employee '{0}' does not exist")]
    UnknownEmployee(String),
    /// An employee with this id already exists.
    #[error("duplicate employee id '{0}'")]
    DuplicateEmployee(String),
    /// A shift edit would leave `start >= end`. Rejected outright,
    /// never silently normalized.
    #[error("shift start {start} must be before end {end}")]
    InvalidTimeRange {
        /// Rejected start time.
        start: TimeOfDay,
        /// Rejected end time.
        end: TimeOfDay,
    },
    /// A move cannot place the shift anywhere on the grid without
    /// shrinking it. Moves preserve duration exactly, so they are
    /// blocked instead.
    #[error("shift of {duration_min} min does not fit the {grid_min} min grid")]
    ShiftExceedsGrid {
        /// The shift's duration.
        duration_min: i32,
        /// Minutes the grid spans.
        grid_min: i32,
    },
}

/// A partial shift edit, as produced by the edit form.
///
/// `None` fields keep their current value. The resulting time range
/// must satisfy `start < end` or the edit is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftEdit {
    /// New owning employee.
    pub employee_id: Option<String>,
    /// New start time.
    pub start: Option<TimeOfDay>,
    /// New end time.
    pub end: Option<TimeOfDay>,
}

/// In-memory schedule state: the employee directory plus all shifts.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBoard {
    grid: DayGrid,
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    next_shift_seq: u64,
}

impl ScheduleBoard {
    /// Creates an empty board over the default day grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board over a custom grid geometry.
    pub fn with_grid(grid: DayGrid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// The board's day grid.
    #[inline]
    pub fn grid(&self) -> &DayGrid {
        &self.grid
    }

    // ---- employee directory ----

    /// Adds an employee. Ids must be unique.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), BoardError> {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return Err(BoardError::DuplicateEmployee(employee.id));
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Replaces an existing employee's record, re-deriving the avatar
    /// initials from the (possibly new) name.
    pub fn update_employee(&mut self, mut employee: Employee) -> Result<(), BoardError> {
        employee.refresh_avatar();
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                Ok(())
            }
            None => Err(BoardError::UnknownEmployee(employee.id)),
        }
    }

    /// All employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of employees with the given role.
    pub fn role_count(&self, role: &Role) -> usize {
        self.employees.iter().filter(|e| &e.role == role).count()
    }

    /// Display name for a shift's employee.
    ///
    /// A dangling `employee_id` yields an empty string rather than an
    /// error; `hide_last` shows the first name only.
    pub fn display_name(&self, employee_id: &str, hide_last: bool) -> &str {
        match self.employee(employee_id) {
            None => "",
            Some(e) if hide_last => e.first_name(),
            Some(e) => &e.name,
        }
    }

    // ---- shift transitions ----

    /// All shifts.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Looks up a shift by id.
    pub fn shift(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Shifts falling on one date.
    pub fn shifts_on(&self, date: NaiveDate) -> Vec<&Shift> {
        self.shifts.iter().filter(|s| s.date == date).collect()
    }

    /// Creates a shift by dropping an employee token at `offset_px`
    /// within `date`'s day column.
    ///
    /// The start is snapped and clamped by the grid; the end is the
    /// 4-hour default truncated at the grid edge. Returns the new
    /// shift's id. (A drop that lands on no day column at all is the
    /// caller's no-op; the board is simply not called.)
    pub fn create_shift_at(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        offset_px: f64,
    ) -> Result<String, BoardError> {
        if self.employee(employee_id).is_none() {
            return Err(BoardError::UnknownEmployee(employee_id.to_string()));
        }
        let (start, end) = self.grid.drop_range(offset_px);
        self.next_shift_seq += 1;
        let id = format!("S{}", self.next_shift_seq);
        self.shifts
            .push(Shift::new(id.clone(), employee_id, date, start, end));
        Ok(id)
    }

    /// Moves a shift to a new start time, preserving its duration.
    ///
    /// The start is re-clamped against the grid so the shift still
    /// fits; near the bottom edge the shift stops at
    /// `grid end - duration` rather than shrinking. A shift longer
    /// than the grid span cannot fit at any start, so the move is
    /// rejected and the shift left unchanged. This is the commit
    /// step for [`DragOutcome::Moved`](crate::drag::DragOutcome).
    pub fn apply_move(&mut self, shift_id: &str, new_start: TimeOfDay) -> Result<(), BoardError> {
        let grid = self.grid;
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == shift_id)
            .ok_or_else(|| BoardError::UnknownShift(shift_id.to_string()))?;

        let duration = shift.duration_min();
        let grid_min = grid.end_min - grid.start_min;
        if duration > grid_min {
            return Err(BoardError::ShiftExceedsGrid {
                duration_min: duration,
                grid_min,
            });
        }
        let start = grid.clamp_start(i32::from(new_start.minutes()), duration);
        let end = TimeOfDay::from_minutes_saturating(i32::from(start.minutes()) + duration);
        shift.start = start;
        shift.end = end;
        Ok(())
    }

    /// Applies an edit-form change to a shift.
    ///
    /// Rejects edits that would leave `start >= end`; the shift is
    /// untouched on error.
    pub fn update_shift(&mut self, shift_id: &str, edit: ShiftEdit) -> Result<(), BoardError> {
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == shift_id)
            .ok_or_else(|| BoardError::UnknownShift(shift_id.to_string()))?;

        let start = edit.start.unwrap_or(shift.start);
        let end = edit.end.unwrap_or(shift.end);
        if start >= end {
            return Err(BoardError::InvalidTimeRange { start, end });
        }

        shift.start = start;
        shift.end = end;
        if let Some(employee_id) = edit.employee_id {
            shift.employee_id = employee_id;
        }
        Ok(())
    }

    /// Removes a shift, returning it.
    pub fn remove_shift(&mut self, shift_id: &str) -> Result<Shift, BoardError> {
        match self.shifts.iter().position(|s| s.id == shift_id) {
            Some(idx) => Ok(self.shifts.remove(idx)),
            None => Err(BoardError::UnknownShift(shift_id.to_string())),
        }
    }

    // ---- derived views ----

    /// Column layout for one day's shifts, recomputed from the current
    /// set on every call.
    pub fn day_layout(&self, date: NaiveDate) -> HashMap<String, SlotLayout> {
        let day: Vec<Shift> = self
            .shifts
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect();
        compute_day_layout(&day)
    }
}
