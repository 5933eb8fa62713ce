//! Drag session for repositioning a shift.
//!
//! Dragging a shift's body turns pointer movement into a stream of
//! snapped start-time previews; releasing either commits the final
//! position or, when the pointer barely moved, counts as a click on
//! the shift (the edit affordance). Without the movement threshold,
//! every intended click would register as a zero-distance drag-move.
//!
//! Previews are provisional: a session never touches the board. The
//! caller renders previews from [`preview`](DragSession::preview) and
//! applies [`DragOutcome::Moved`] via
//! [`ScheduleBoard::apply_move`](crate::board::ScheduleBoard::apply_move).
//! An abandoned drag therefore leaves the shift set unchanged.

use crate::grid::DayGrid;
use crate::models::{Shift, TimeOfDay};

/// Pointer travel below this many pixels on release is a click,
/// not a drag.
pub const CLICK_THRESHOLD_PX: f64 = 4.0;

/// An in-progress drag of one shift.
///
/// Captures the shift's geometry at pointer-down; all previews are
/// computed relative to that origin, so intermediate pointer events
/// never accumulate rounding error.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Shift being dragged.
    pub shift_id: String,
    origin_offset_px: f64,
    duration_min: i32,
    pointer_down_y: f64,
}

/// What a released drag resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Pointer travel stayed under [`CLICK_THRESHOLD_PX`]; treat as a
    /// click on the shift and open its edit affordance.
    Click,
    /// Commit the shift to this start time (duration unchanged).
    Moved(TimeOfDay),
}

impl DragSession {
    /// Starts dragging `shift` from a pointer-down at `pointer_y`
    /// (pixels within the day column).
    pub fn begin(shift: &Shift, grid: &DayGrid, pointer_y: f64) -> Self {
        Self {
            shift_id: shift.id.clone(),
            origin_offset_px: grid.offset_of(shift.start),
            duration_min: shift.duration_min(),
            pointer_down_y: pointer_y,
        }
    }

    /// Snapped, clamped start time for the current pointer position.
    ///
    /// Duration is preserved: the start clamps to
    /// `grid end - duration`, so a shift dragged toward the bottom
    /// stops moving rather than shrinking. Call on every pointer-move
    /// to render the live preview.
    pub fn preview(&self, grid: &DayGrid, pointer_y: f64) -> TimeOfDay {
        let offset = self.origin_offset_px + (pointer_y - self.pointer_down_y);
        let snapped = grid.time_at(offset);
        grid.clamp_start(i32::from(snapped.minutes()), self.duration_min)
    }

    /// Resolves the session at pointer-up.
    pub fn release(self, grid: &DayGrid, pointer_y: f64) -> DragOutcome {
        if (pointer_y - self.pointer_down_y).abs() < CLICK_THRESHOLD_PX {
            DragOutcome::Click
        } else {
            DragOutcome::Moved(self.preview(grid, pointer_y))
        }
    }
}
