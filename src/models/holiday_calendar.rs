//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types the
//! caller uses to decide whether a shift is worked on a holiday. The classifier
//! itself never consults a calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single public holiday.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
///     name: "Día de la Independencia".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The region where this holiday applies.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// A set of public holidays, kept sorted by date.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::{HolidayCalendar, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Navidad".to_string(),
///     region: "national".to_string(),
/// }]);
///
/// assert!(calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// assert!(!calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from the given holidays.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        let mut sorted = holidays;
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        Self { holidays: sorted }
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays
            .binary_search_by(|h| h.date.cmp(&date))
            .ok()
            .map(|idx| &self.holidays[idx])
    }

    /// Checks if a given date is a public holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// All holidays, oldest first.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32, name: &str) -> PublicHoliday {
        PublicHoliday {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            name: name.to_string(),
            region: "national".to_string(),
        }
    }

    #[test]
    fn test_is_public_holiday_returns_true() {
        let calendar = HolidayCalendar::new(vec![holiday(2026, 5, 1, "Día del Trabajo")]);
        assert!(calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
    }

    #[test]
    fn test_is_public_holiday_returns_false() {
        let calendar = HolidayCalendar::default();
        assert!(!calendar.is_public_holiday(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
        assert!(calendar.is_empty());
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let calendar = HolidayCalendar::new(vec![
            holiday(2026, 12, 25, "Navidad"),
            holiday(2026, 1, 1, "Año Nuevo"),
            holiday(2026, 7, 20, "Independencia"),
        ]);

        let names: Vec<&str> = calendar.holidays().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Año Nuevo", "Independencia", "Navidad"]);
        assert_eq!(
            calendar
                .holiday_on(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap())
                .map(|h| h.name.as_str()),
            Some("Navidad")
        );
    }

    #[test]
    fn test_deserialize_public_holiday_default_region() {
        let yaml = "date: 2026-08-07\nname: Batalla de Boyacá\n";
        let holiday: PublicHoliday = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert_eq!(holiday.region, "national");
    }

    #[test]
    fn test_serialize_public_holiday() {
        let json = serde_json::to_string(&holiday(2026, 12, 25, "Navidad")).unwrap();
        assert!(json.contains("\"date\":\"2026-12-25\""));
        assert!(json.contains("\"name\":\"Navidad\""));
        assert!(json.contains("\"region\":\"national\""));
    }
}
