//! The day grid: pixel-to-time mapping with snap and clamp.
//!
//! The scheduling canvas renders each day as a fixed vertical strip
//! starting at 09:00 and spanning 15 hours, drawn at one pixel per
//! minute. Drops and drags arrive as pixel offsets within that strip;
//! this module converts them to quarter-hour-snapped, clamped start
//! times, and back.
//!
//! Snapping rounds to the *nearest* quarter hour using
//! round-half-away-from-zero (`f64::round`): an offset exactly between
//! two snap points resolves to the later one.

use crate::models::TimeOfDay;

/// Default drop-created shift length (4 hours).
pub const DEFAULT_SHIFT_MIN: i32 = 240;

/// Fixed-geometry day canvas.
///
/// The default grid runs 09:00..24:00 with 15-minute snapping at one
/// pixel per minute, matching the rendered schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGrid {
    /// First minute-of-day on the canvas.
    pub start_min: i32,
    /// One past the last minute-of-day on the canvas.
    pub end_min: i32,
    /// Snap increment in minutes.
    pub snap_min: i32,
    /// Vertical scale.
    pub px_per_min: f64,
}

impl Default for DayGrid {
    fn default() -> Self {
        Self {
            start_min: 540,
            end_min: 1440,
            snap_min: 15,
            px_per_min: 1.0,
        }
    }
}

impl DayGrid {
    /// Grid height in pixels.
    #[inline]
    pub fn height_px(&self) -> f64 {
        (self.end_min - self.start_min) as f64 * self.px_per_min
    }

    /// Maps a vertical pixel offset to a snapped, clamped start time.
    ///
    /// The result is always a snap multiple within
    /// `[start_min, end_min - snap_min]`, so at least one snap
    /// increment of shift fits below it. Any offset maps somewhere:
    /// far-negative offsets pin to grid start, far-positive ones to
    /// the last slot.
    pub fn time_at(&self, offset_px: f64) -> TimeOfDay {
        let raw_min = self.start_min as f64 + offset_px / self.px_per_min;
        let snapped = (raw_min / self.snap_min as f64).round() as i32 * self.snap_min;
        let clamped = snapped.clamp(self.start_min, self.end_min - self.snap_min);
        TimeOfDay::from_minutes_saturating(clamped)
    }

    /// Pixel offset of a time within the grid. Inverse of [`time_at`]
    /// for snapped in-range times; does not snap or clamp itself.
    ///
    /// [`time_at`]: DayGrid::time_at
    #[inline]
    pub fn offset_of(&self, time: TimeOfDay) -> f64 {
        (i32::from(time.minutes()) - self.start_min) as f64 * self.px_per_min
    }

    /// Start/end times for a shift created by dropping at `offset_px`.
    ///
    /// The start comes from [`time_at`]; the end is the 4-hour default
    /// truncated at the grid edge. Truncation deliberately shortens
    /// the shift rather than pushing the start up.
    ///
    /// [`time_at`]: DayGrid::time_at
    pub fn drop_range(&self, offset_px: f64) -> (TimeOfDay, TimeOfDay) {
        let start = self.time_at(offset_px);
        let end_min = (i32::from(start.minutes()) + DEFAULT_SHIFT_MIN).min(self.end_min);
        let end = TimeOfDay::from_minutes_saturating(end_min);
        (start, end)
    }

    /// Clamps a prospective start so a shift of `duration_min` still
    /// fits on the grid. Duration is preserved; a shift dragged toward
    /// the bottom stops at `end_min - duration` instead of shrinking.
    pub fn clamp_start(&self, start_min: i32, duration_min: i32) -> TimeOfDay {
        let max_start = self.end_min - duration_min;
        let clamped = start_min.clamp(self.start_min, max_start.max(self.start_min));
        TimeOfDay::from_minutes_saturating(clamped)
    }
}
