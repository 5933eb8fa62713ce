//! Roster integrity checks.
//!
//! Validates externally-supplied employee and shift data before
//! trusting it with the board or the layout engine. Detects:
//! - Duplicate employee or shift ids
//! - Inverted time ranges (`start >= end`)
//! - Dangling employee references
//!
//! Dangling references are reported here for integrity tooling even
//! though the rendering path tolerates them (blank name). Inverted
//! ranges, by contrast, must be excluded before layout: the layout
//! engine's caller contract requires `start < end`.

use std::collections::HashSet;

use crate::models::{Employee, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A shift's start is not before its end.
    InvalidTimeRange,
    /// A shift references an employee that doesn't exist.
    DanglingEmployee,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster of employees and shifts.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No duplicate shift IDs
/// 3. Every shift has `start < end`
/// 4. Every shift's employee reference resolves
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee], shifts: &[Shift]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
    }

    let mut shift_ids = HashSet::new();
    for s in shifts {
        if !shift_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", s.id),
            ));
        }

        if s.start >= s.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Shift '{}' starts at {} but ends at {}",
                    s.id, s.start, s.end
                ),
            ));
        }

        if !employee_ids.contains(s.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingEmployee,
                format!(
                    "Shift '{}' references unknown employee '{}'",
                    s.id, s.employee_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
