//! Shift descriptor handed to the classifier.

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use crate::calculation::get_day_type;
use crate::error::{EngineError, EngineResult};

use super::HolidayCalendar;

/// Largest accepted shift length, and largest accepted `|start_hour|`.
///
/// Keeps `start + total` well inside `Decimal` range and bounds the sweep to
/// 20 000 slots.
pub const MAX_SHIFT_HOURS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

const SECONDS_PER_HOUR: i64 = 3_600;

/// A work shift expressed as a continuous interval of hours.
///
/// `start_hour` is the clock hour the shift begins. It may lie outside
/// `[0, 24)`: a start of 44 is 20:00 on the third day. A multi-day shift is a
/// single interval, e.g. start 20 with 28 hours ends at absolute hour 48.
///
/// The holiday flag applies to the entire shift; a shift crossing from a
/// Sunday into a Monday is classified entirely under the start day's rule.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::new(Decimal::from(22), Decimal::from(8), false).unwrap();
/// assert_eq!(shift.end_hour(), Decimal::from(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftInput {
    start_hour: Decimal,
    total_hours: Decimal,
    is_holiday_or_sunday: bool,
}

impl ShiftInput {
    /// Creates a shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if `total_hours` is negative, or if
    /// `total_hours` or `|start_hour|` exceeds [`MAX_SHIFT_HOURS`].
    pub fn new(
        start_hour: Decimal,
        total_hours: Decimal,
        is_holiday_or_sunday: bool,
    ) -> EngineResult<Self> {
        if total_hours < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "total_hours",
                format!("must not be negative, got {}", total_hours.normalize()),
            ));
        }
        if total_hours > MAX_SHIFT_HOURS {
            return Err(EngineError::invalid_input(
                "total_hours",
                format!(
                    "must not exceed {} hours, got {}",
                    MAX_SHIFT_HOURS,
                    total_hours.normalize()
                ),
            ));
        }
        if start_hour.abs() > MAX_SHIFT_HOURS {
            return Err(EngineError::invalid_input(
                "start_hour",
                format!(
                    "must be within ±{} hours, got {}",
                    MAX_SHIFT_HOURS,
                    start_hour.normalize()
                ),
            ));
        }
        Ok(Self {
            start_hour,
            total_hours,
            is_holiday_or_sunday,
        })
    }

    /// Creates a shift from floating-point hours.
    ///
    /// Non-finite values are rejected, as is anything [`ShiftInput::new`] rejects.
    pub fn from_f64(
        start_hour: f64,
        total_hours: f64,
        is_holiday_or_sunday: bool,
    ) -> EngineResult<Self> {
        let start = finite_decimal("start_hour", start_hour)?;
        let total = finite_decimal("total_hours", total_hours)?;
        Self::new(start, total, is_holiday_or_sunday)
    }

    /// Creates a shift from wall-clock start and end times.
    ///
    /// The start hour and duration are taken to the second (sub-second parts are
    /// dropped), and the
    /// holiday flag is decided from the start date against `calendar` (Sundays
    /// always count).
    ///
    /// # Example
    ///
    /// ```
    /// use surcharge_engine::models::{HolidayCalendar, ShiftInput};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// // 2026-01-18 is a Sunday
    /// let start = NaiveDateTime::parse_from_str("2026-01-18 21:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-19 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let shift = ShiftInput::from_times(start, end, &HolidayCalendar::default()).unwrap();
    /// assert_eq!(shift.start_hour(), Decimal::new(215, 1));
    /// assert_eq!(shift.total_hours(), Decimal::new(85, 1));
    /// assert!(shift.is_holiday_or_sunday());
    /// ```
    pub fn from_times(
        start: NaiveDateTime,
        end: NaiveDateTime,
        calendar: &HolidayCalendar,
    ) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::invalid_input(
                "end_time",
                format!("end time {} is before start time {}", end, start),
            ));
        }

        let start_seconds = i64::from(start.num_seconds_from_midnight());
        let worked_seconds = (end - start).num_seconds();
        let seconds_per_hour = Decimal::new(SECONDS_PER_HOUR, 0);

        let day_type = get_day_type(start.date(), calendar);

        Self::new(
            Decimal::new(start_seconds, 0) / seconds_per_hour,
            Decimal::new(worked_seconds, 0) / seconds_per_hour,
            day_type.is_holiday_or_sunday(),
        )
    }

    /// Clock hour the shift begins.
    pub fn start_hour(&self) -> Decimal {
        self.start_hour
    }

    /// Length of the shift in hours.
    pub fn total_hours(&self) -> Decimal {
        self.total_hours
    }

    /// Whether the whole shift is worked on a Sunday or public holiday.
    pub fn is_holiday_or_sunday(&self) -> bool {
        self.is_holiday_or_sunday
    }

    /// Absolute hour the shift ends.
    pub fn end_hour(&self) -> Decimal {
        self.start_hour + self.total_hours
    }
}

fn finite_decimal(field: &str, value: f64) -> EngineResult<Decimal> {
    if !value.is_finite() {
        return Err(EngineError::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        EngineError::invalid_input(field, format!("{} is out of range", value))
    })
}
