//! Day layout engine.
//!
//! Resolves visual overlap among a day's shifts: each shift is
//! assigned a column so that no two time-overlapping shifts share one,
//! and every shift learns how many columns its overlap cluster needs
//! so the renderer can divide the day column's width proportionally.
//!
//! # Algorithm
//!
//! Greedy interval partitioning over half-open `[start, end)` minute
//! intervals:
//!
//! 1. Sort shifts by start minute; equal starts tie-break by shift id
//!    so the assignment is deterministic regardless of input order.
//! 2. Sweep in start order, keeping an active list sorted by end
//!    minute. Shifts whose end is at or before the current start are
//!    evicted first (touching endpoints do not overlap).
//! 3. The current shift takes the smallest column index unused by the
//!    remaining active shifts.
//! 4. After insertion, `1 + max(active column)` is written back as
//!    `total_columns` for *every* active shift: a later arrival can
//!    widen the cluster recorded for earlier members.
//!
//! O(n log n) in the day's shift count, with an O(k) column scan per
//! shift over the k concurrently active ones. Per-day counts are tens
//! at most, so the scan is not worth an interval tree.
//!
//! Layout entries are pure functions of the day's shift set. They are
//! recomputed on every call and must never be cached across mutations.

use std::collections::HashMap;

use crate::models::Shift;

/// Column placement for one shift within its day.
///
/// Valid only for the shift set it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    /// Zero-based column index.
    pub col_index: usize,
    /// Columns in use by this shift's overlap cluster. Always greater
    /// than `col_index`.
    pub total_columns: usize,
}

impl SlotLayout {
    /// Fraction of the day column's width this shift occupies.
    #[inline]
    pub fn width_fraction(&self) -> f64 {
        1.0 / self.total_columns as f64
    }

    /// Fractional left edge of this shift within the day column.
    #[inline]
    pub fn left_fraction(&self) -> f64 {
        self.col_index as f64 * self.width_fraction()
    }
}

struct ActiveInterval<'a> {
    id: &'a str,
    end_min: u16,
    column: usize,
}

/// Computes column placements for all shifts on one day.
///
/// `shifts` must all fall on the same date and satisfy `start < end`;
/// [`ScheduleBoard`](crate::board::ScheduleBoard) guarantees both.
/// Overlapping shifts receive distinct `col_index` values, and each
/// shift's `total_columns` is the widest concurrency its cluster
/// reached while it was active. Empty input yields an empty map.
pub fn compute_day_layout(shifts: &[Shift]) -> HashMap<String, SlotLayout> {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut layout: HashMap<String, SlotLayout> = HashMap::with_capacity(shifts.len());
    let mut active: Vec<ActiveInterval<'_>> = Vec::new();

    for shift in ordered {
        let start_min = shift.start.minutes();
        active.retain(|a| a.end_min > start_min);

        // Smallest column index not held by any still-active shift.
        let mut column = 0;
        while active.iter().any(|a| a.column == column) {
            column += 1;
        }

        active.push(ActiveInterval {
            id: &shift.id,
            end_min: shift.end.minutes(),
            column,
        });
        active.sort_by_key(|a| a.end_min);

        let total_columns = 1 + active.iter().map(|a| a.column).max().unwrap_or(0);
        for a in &active {
            layout.insert(
                a.id.to_string(),
                SlotLayout {
                    col_index: a.column,
                    total_columns,
                },
            );
        }
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn shift(id: &str, start: (u16, u16), end: (u16, u16)) -> Shift {
        Shift::new(
            id,
            "E1",
            date(),
            TimeOfDay::hm(start.0, start.1).unwrap(),
            TimeOfDay::hm(end.0, end.1).unwrap(),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_day_layout(&[]).is_empty());
    }

    #[test]
    fn test_single_shift() {
        let layout = compute_day_layout(&[shift("a", (9, 0), (17, 0))]);
        assert_eq!(
            layout["a"],
            SlotLayout {
                col_index: 0,
                total_columns: 1
            }
        );
    }

    #[test]
    fn test_three_overlapping_then_reuse_freed_column() {
        // A 09:00-17:00, B 11:00-19:00, C 12:00-20:00 stack into three
        // columns. D 17:30-18:00 starts after A ends, so column 0 is
        // free again; D joins the {B, C} cluster at width 3.
        let shifts = [
            shift("A", (9, 0), (17, 0)),
            shift("B", (11, 0), (19, 0)),
            shift("C", (12, 0), (20, 0)),
            shift("D", (17, 30), (18, 0)),
        ];
        let layout = compute_day_layout(&shifts);

        assert_eq!(layout["A"].col_index, 0);
        assert_eq!(layout["B"].col_index, 1);
        assert_eq!(layout["C"].col_index, 2);
        assert_eq!(layout["D"].col_index, 0);

        assert_eq!(layout["A"].total_columns, 3);
        assert_eq!(layout["B"].total_columns, 3);
        assert_eq!(layout["C"].total_columns, 3);
        assert_eq!(layout["D"].total_columns, 3);
    }

    #[test]
    fn test_touching_endpoints_share_column() {
        let shifts = [shift("a", (9, 0), (12, 0)), shift("b", (12, 0), (15, 0))];
        let layout = compute_day_layout(&shifts);

        for id in ["a", "b"] {
            assert_eq!(layout[id].col_index, 0);
            assert_eq!(layout[id].total_columns, 1);
        }
    }

    #[test]
    fn test_later_arrival_widens_earlier_entries() {
        // b arrives while a is active; a's recorded width must grow.
        let shifts = [shift("a", (9, 0), (17, 0)), shift("b", (10, 0), (11, 0))];
        let layout = compute_day_layout(&shifts);
        assert_eq!(layout["a"].total_columns, 2);
        assert_eq!(layout["b"].total_columns, 2);
    }

    #[test]
    fn test_equal_starts_tie_break_by_id() {
        let forward = [shift("a", (9, 0), (12, 0)), shift("b", (9, 0), (13, 0))];
        let reversed = [shift("b", (9, 0), (13, 0)), shift("a", (9, 0), (12, 0))];

        let l1 = compute_day_layout(&forward);
        let l2 = compute_day_layout(&reversed);
        assert_eq!(l1, l2);
        assert_eq!(l1["a"].col_index, 0);
        assert_eq!(l1["b"].col_index, 1);
    }

    #[test]
    fn test_deterministic_repeat() {
        let shifts = [
            shift("A", (9, 0), (17, 0)),
            shift("B", (11, 0), (19, 0)),
            shift("C", (12, 0), (20, 0)),
        ];
        assert_eq!(compute_day_layout(&shifts), compute_day_layout(&shifts));
    }

    #[test]
    fn test_width_fractions() {
        let slot = SlotLayout {
            col_index: 1,
            total_columns: 2,
        };
        assert!((slot.width_fraction() - 0.5).abs() < 1e-10);
        assert!((slot.left_fraction() - 0.5).abs() < 1e-10);
    }

    fn arb_shifts() -> impl Strategy<Value = Vec<Shift>> {
        // Random minute intervals within the day, start < end.
        prop::collection::vec((0u16..1420, 1u16..120), 0..12).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (start, len))| {
                    let end = (start + len).min(1440);
                    Shift::new(
                        format!("S{i}"),
                        "E1",
                        date(),
                        TimeOfDay::from_minutes(i32::from(start)).unwrap(),
                        TimeOfDay::from_minutes(i32::from(end)).unwrap(),
                    )
                })
                .collect()
        })
    }

    proptest! {
        /// Overlapping shifts never share a column.
        #[test]
        fn prop_overlapping_shifts_get_distinct_columns(shifts in arb_shifts()) {
            let layout = compute_day_layout(&shifts);
            for a in &shifts {
                for b in &shifts {
                    if a.id != b.id && a.overlaps(b) {
                        prop_assert_ne!(layout[&a.id].col_index, layout[&b.id].col_index);
                    }
                }
            }
        }

        /// `total_columns` always exceeds the shift's own column index,
        /// and never exceeds the day's peak concurrency.
        #[test]
        fn prop_total_columns_bounds(shifts in arb_shifts()) {
            let layout = compute_day_layout(&shifts);

            // Peak concurrency: max shifts active at any start minute.
            let peak = shifts
                .iter()
                .map(|s| {
                    shifts
                        .iter()
                        .filter(|o| {
                            o.start <= s.start && s.start < o.end
                        })
                        .count()
                })
                .max()
                .unwrap_or(0);

            for s in &shifts {
                let slot = layout[&s.id];
                prop_assert!(slot.total_columns > slot.col_index);
                prop_assert!(slot.total_columns <= peak);
            }
        }

        /// Layout is a pure function of the shift set: shuffling input
        /// order changes nothing.
        #[test]
        fn prop_order_independent(shifts in arb_shifts()) {
            let mut reversed = shifts.clone();
            reversed.reverse();
            prop_assert_eq!(compute_day_layout(&shifts), compute_day_layout(&reversed));
        }
    }
}
