//! Day detection for the holiday/Sunday flag.
//!
//! The classifier takes a single boolean for the whole shift. This module is
//! the calendar logic that decides it from a date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// Represents the type of day a shift starts on.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::DayType;
///
/// assert!(DayType::Sunday.is_holiday_or_sunday());
/// assert!(!DayType::Ordinary.is_holiday_or_sunday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Saturday, not a public holiday.
    Ordinary,
    /// Sunday.
    Sunday,
    /// A listed public holiday, whatever the weekday.
    PublicHoliday,
}

impl DayType {
    /// Whether holiday/Sunday rules apply.
    pub fn is_holiday_or_sunday(&self) -> bool {
        !matches!(self, DayType::Ordinary)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Ordinary => write!(f, "Ordinary"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::PublicHoliday => write!(f, "Public Holiday"),
        }
    }
}

/// Determines the day type for a date.
///
/// A public holiday takes precedence over Sunday.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::{get_day_type, DayType};
/// use surcharge_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(get_day_type(sunday, &calendar), DayType::Sunday);
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday, &calendar), DayType::Ordinary);
/// ```
pub fn get_day_type(date: NaiveDate, calendar: &HolidayCalendar) -> DayType {
    if calendar.is_public_holiday(date) {
        DayType::PublicHoliday
    } else if date.weekday() == Weekday::Sun {
        DayType::Sunday
    } else {
        DayType::Ordinary
    }
}
