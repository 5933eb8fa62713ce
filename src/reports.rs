//! Weekly hours and payroll figures.
//!
//! Aggregates one week of finalized shifts into per-employee hour and
//! pay rows plus the week's totals. Purely computational: report file
//! generation (PDF/spreadsheet) is out of scope.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total hours | Sum of shift durations in the week |
//! | Normal hours | Hours up to the employee's weekly contract |
//! | Overtime hours | Hours beyond the contract |
//! | Total pay | `normal * rate + overtime * rate * 1.5` |

use crate::models::{Employee, Shift, Week};

/// Pay multiplier for hours beyond an employee's weekly contract.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// One employee's row in the weekly report.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeHours {
    /// Employee id.
    pub employee_id: String,
    /// Employee name at report time.
    pub name: String,
    /// Role label at report time.
    pub role: String,
    /// Hours within the weekly contract.
    pub normal_hours: f64,
    /// Hours beyond the weekly contract.
    pub overtime_hours: f64,
    /// Pay rate per hour.
    pub hourly_rate: f64,
    /// Normal pay plus overtime at [`OVERTIME_MULTIPLIER`].
    pub total_pay: f64,
}

impl EmployeeHours {
    /// Normal plus overtime hours.
    #[inline]
    pub fn total_hours(&self) -> f64 {
        self.normal_hours + self.overtime_hours
    }
}

/// A week's aggregated report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    /// The reported week.
    pub week: Week,
    /// Per-employee rows, in directory order. Employees with no
    /// shifts that week appear with zeroed hours.
    pub rows: Vec<EmployeeHours>,
}

impl WeekReport {
    /// Computes the report for `week` from the full shift set.
    ///
    /// Shifts referencing an employee absent from `employees` carry
    /// hours nobody is paid for; they are skipped here, consistent
    /// with the blank-name rendering policy for dangling references.
    pub fn calculate(employees: &[Employee], shifts: &[Shift], week: Week) -> Self {
        let rows = employees
            .iter()
            .map(|employee| {
                let minutes: i32 = shifts
                    .iter()
                    .filter(|s| s.employee_id == employee.id && week.contains(s.date))
                    .map(Shift::duration_min)
                    .sum();
                let total_hours = f64::from(minutes) / 60.0;

                let normal_hours = total_hours.min(employee.contract_hours);
                let overtime_hours = total_hours - normal_hours;
                let total_pay = normal_hours * employee.hourly_rate
                    + overtime_hours * employee.hourly_rate * OVERTIME_MULTIPLIER;

                EmployeeHours {
                    employee_id: employee.id.clone(),
                    name: employee.name.clone(),
                    role: employee.role.label().to_string(),
                    normal_hours,
                    overtime_hours,
                    hourly_rate: employee.hourly_rate,
                    total_pay,
                }
            })
            .collect();

        Self { week, rows }
    }

    /// Sum of normal hours across all rows.
    pub fn total_normal_hours(&self) -> f64 {
        self.rows.iter().map(|r| r.normal_hours).sum()
    }

    /// Sum of overtime hours across all rows.
    pub fn total_overtime_hours(&self) -> f64 {
        self.rows.iter().map(|r| r.overtime_hours).sum()
    }

    /// Sum of all hours across all rows.
    pub fn total_hours(&self) -> f64 {
        self.rows.iter().map(EmployeeHours::total_hours).sum()
    }

    /// Total payroll cost for the week.
    pub fn total_payroll(&self) -> f64 {
        self.rows.iter().map(|r| r.total_pay).sum()
    }
}
