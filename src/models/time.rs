//! Minute-granularity time-of-day.
//!
//! Shifts are positioned on a day canvas at minute resolution, so the
//! core time type is a minute-of-day count rather than a full
//! timestamp. Values serialize as `"HH:MM"` strings to match the
//! stored shift records.
//!
//! # Range
//! `0..=1440`. Minute 1440 (`"24:00"`) is a valid *end* time: a shift
//! may finish exactly at midnight without spanning into the next day.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Largest representable minute-of-day (24:00, exclusive end of day).
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day with minute granularity.
///
/// Ordered, copyable, and hashable; formats and parses as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

/// Error produced when parsing an `"HH:MM"` string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day '{input}': expected HH:MM between 00:00 and 24:00")]
pub struct ParseTimeError {
    /// The rejected input.
    pub input: String,
}

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    ///
    /// Returns `None` outside `0..=1440`.
    pub fn from_minutes(minutes: i32) -> Option<Self> {
        if (0..=i32::from(MINUTES_PER_DAY)).contains(&minutes) {
            Some(Self(minutes as u16))
        } else {
            None
        }
    }

    /// Creates a time from minutes since midnight, saturating at the
    /// day's bounds instead of rejecting out-of-range values.
    pub fn from_minutes_saturating(minutes: i32) -> Self {
        Self(minutes.clamp(0, i32::from(MINUTES_PER_DAY)) as u16)
    }

    /// Creates a time from hour and minute components.
    ///
    /// Accepts `24:00` as the end-of-day sentinel; any other hour ≥ 24
    /// or minute ≥ 60 returns `None`.
    pub fn hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let total = hour * 60 + minute;
        if total > MINUTES_PER_DAY {
            return None;
        }
        Some(Self(total))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0..=24).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component within the hour.
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes from `self` to `later` (negative if `later` is earlier).
    #[inline]
    pub fn minutes_until(self, later: TimeOfDay) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError {
            input: s.to_string(),
        };
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        Self::hm(hour, minute).ok_or_else(err)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minutes_range() {
        assert_eq!(TimeOfDay::from_minutes(0), TimeOfDay::hm(0, 0));
        assert_eq!(TimeOfDay::from_minutes(540), TimeOfDay::hm(9, 0));
        assert_eq!(TimeOfDay::from_minutes(1440), TimeOfDay::hm(24, 0));
        assert!(TimeOfDay::from_minutes(-1).is_none());
        assert!(TimeOfDay::from_minutes(1441).is_none());
    }

    #[test]
    fn test_from_minutes_saturating() {
        assert_eq!(
            TimeOfDay::from_minutes_saturating(-50),
            TimeOfDay::hm(0, 0).unwrap()
        );
        assert_eq!(
            TimeOfDay::from_minutes_saturating(2000),
            TimeOfDay::hm(24, 0).unwrap()
        );
        assert_eq!(
            TimeOfDay::from_minutes_saturating(600),
            TimeOfDay::hm(10, 0).unwrap()
        );
    }

    #[test]
    fn test_hm_components() {
        let t = TimeOfDay::hm(13, 45).unwrap();
        assert_eq!(t.hour(), 13);
        assert_eq!(t.minute(), 45);
        assert_eq!(t.minutes(), 825);

        assert!(TimeOfDay::hm(9, 60).is_none());
        assert!(TimeOfDay::hm(24, 1).is_none());
        assert!(TimeOfDay::hm(25, 0).is_none());
    }

    #[test]
    fn test_display_and_parse() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t, TimeOfDay::hm(9, 30).unwrap());
        assert_eq!(t.to_string(), "09:30");

        let midnight_end: TimeOfDay = "24:00".parse().unwrap();
        assert_eq!(midnight_end.minutes(), 1440);

        assert!("9".parse::<TimeOfDay>().is_err());
        assert!("24:30".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_ordering() {
        let a = TimeOfDay::hm(9, 0).unwrap();
        let b = TimeOfDay::hm(17, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_minutes_until() {
        let a = TimeOfDay::hm(9, 0).unwrap();
        let b = TimeOfDay::hm(13, 0).unwrap();
        assert_eq!(a.minutes_until(b), 240);
        assert_eq!(b.minutes_until(a), -240);
    }

    #[test]
    fn test_serde_round_trip() {
        let t = TimeOfDay::hm(17, 15).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"17:15\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
