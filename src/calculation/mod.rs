//! Calculation logic for the Surcharge Engine.
//!
//! This module contains the half-hour sweep classifier, the clock-hour and
//! night-window helpers it relies on, and day detection used by callers to
//! decide whether a shift falls on a Sunday or public holiday.

mod classifier;
mod day_detection;
mod night_window;

pub use classifier::{SLOT_HOURS, SurchargeClassification, classify, classify_with_audit};
pub use day_detection::{DayType, get_day_type};
pub use night_window::{HOURS_PER_DAY, clock_hour, is_night};
