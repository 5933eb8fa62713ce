//! Employee model.
//!
//! Staff directory entries: contact details, role, and the work
//! parameters (hourly rate, contract hours, daily cap, break type)
//! that the weekly report and scheduling views consume.

use serde::{Deserialize, Serialize};

/// A staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Job role.
    pub role: Role,
    /// Pay rate per hour.
    pub hourly_rate: f64,
    /// Contracted hours per week. Hours beyond this count as overtime.
    pub contract_hours: f64,
    /// Maximum scheduled hours per day (advisory; not enforced by the
    /// layout or drag core).
    pub max_hours_per_day: f64,
    /// Break arrangement, free-form (e.g. "1h continuous", "Split shift").
    pub break_type: String,
    /// Display initials, derived from the name.
    pub avatar: String,
}

/// Job role classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Floor or venue manager.
    Manager,
    /// Kitchen staff.
    Chef,
    /// Service staff.
    Waiter,
    /// Venue-specific role.
    Custom(String),
}

impl Role {
    /// Display label for this role.
    pub fn label(&self) -> &str {
        match self {
            Self::Manager => "Manager",
            Self::Chef => "Chef",
            Self::Waiter => "Waiter",
            Self::Custom(name) => name,
        }
    }
}

impl Employee {
    /// Creates a new employee with the given ID, name, and role.
    ///
    /// Avatar initials are derived from the name; other fields start
    /// empty or zero and are filled via the `with_*` builders.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        let name = name.into();
        let avatar = initials(&name);
        Self {
            id: id.into(),
            name,
            email: String::new(),
            phone: String::new(),
            role,
            hourly_rate: 0.0,
            contract_hours: 0.0,
            max_hours_per_day: 0.0,
            break_type: String::new(),
            avatar,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the hourly pay rate.
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }

    /// Sets the weekly contract hours.
    pub fn with_contract_hours(mut self, hours: f64) -> Self {
        self.contract_hours = hours;
        self
    }

    /// Sets the daily hour cap.
    pub fn with_max_hours_per_day(mut self, hours: f64) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Sets the break arrangement.
    pub fn with_break_type(mut self, break_type: impl Into<String>) -> Self {
        self.break_type = break_type.into();
        self
    }

    /// Re-derives the avatar initials from the current name. Call
    /// after any edit that may have changed the name.
    pub fn refresh_avatar(&mut self) {
        self.avatar = initials(&self.name);
    }

    /// First name only (up to the first whitespace).
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Uppercase initials of each whitespace-separated name part.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("E1", "Sarah Johnson", Role::Manager)
            .with_email("sarah.johnson@restaurant.com")
            .with_phone("(555) 123-4567")
            .with_hourly_rate(25.0)
            .with_contract_hours(40.0)
            .with_max_hours_per_day(8.0)
            .with_break_type("1h continuous");

        assert_eq!(e.id, "E1");
        assert_eq!(e.role, Role::Manager);
        assert_eq!(e.avatar, "SJ");
        assert!((e.hourly_rate - 25.0).abs() < 1e-10);
        assert!((e.contract_hours - 40.0).abs() < 1e-10);
        assert_eq!(e.break_type, "1h continuous");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("mike chen"), "MC");
        assert_eq!(initials("Plain"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_refresh_avatar_after_name_edit() {
        let mut e = Employee::new("E1", "Emma Davis", Role::Waiter);
        assert_eq!(e.avatar, "ED");
        e.name = "Emma Wilson".to_string();
        e.refresh_avatar();
        assert_eq!(e.avatar, "EW");
    }

    #[test]
    fn test_first_name() {
        let e = Employee::new("E1", "Alex Wilson", Role::Waiter);
        assert_eq!(e.first_name(), "Alex");

        let single = Employee::new("E2", "Cher", Role::Custom("Host".into()));
        assert_eq!(single.first_name(), "Cher");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Manager.label(), "Manager");
        assert_eq!(Role::Custom("Sommelier".into()).label(), "Sommelier");
    }
}
