//! Staff shift scheduling core.
//!
//! In-memory engine behind a weekly drag-and-drop scheduling board:
//! employee and shift models, the overlap-resolving day layout, the
//! pixel-to-time mapping that powers drop and drag placement, and the
//! weekly payroll figures.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Shift`, `TimeOfDay`, `Week`
//! - **`layout`**: Column assignment for overlapping same-day shifts
//! - **`grid`**: Pixel offset ↔ snapped/clamped time-of-day mapping
//! - **`drag`**: Drag sessions with click-vs-drag disambiguation
//! - **`board`**: The shift set and its explicit state transitions
//! - **`reports`**: Weekly hours and pay aggregation
//! - **`validation`**: Roster integrity checks (duplicate IDs, inverted
//!   ranges, dangling employee refs)
//!
//! # Flow
//!
//! Dropping an employee token on a day column maps the pixel offset to
//! a snapped start time and creates a default 4-hour shift
//! ([`ScheduleBoard::create_shift_at`](board::ScheduleBoard::create_shift_at));
//! dragging a shift previews new positions
//! ([`DragSession::preview`](drag::DragSession::preview)) and commits
//! on release ([`ScheduleBoard::apply_move`](board::ScheduleBoard::apply_move));
//! after any mutation the day's column layout is recomputed from
//! scratch ([`compute_day_layout`](layout::compute_day_layout)).
//!
//! Everything is synchronous and single-writer: the board mutates only
//! through discrete UI-triggered transitions, and the layout and
//! mapping functions are pure.

pub mod board;
pub mod drag;
pub mod grid;
pub mod layout;
pub mod models;
pub mod reports;
pub mod validation;
