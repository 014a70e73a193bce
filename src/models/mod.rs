//! Core data models for the Surcharge Engine.
//!
//! This module contains the shift descriptor, the category breakdown, the
//! holiday calendar and audit records used throughout the engine.

mod audit;
mod breakdown;
mod holiday_calendar;
mod shift_input;

pub use audit::AuditStep;
pub use breakdown::{SurchargeBreakdown, SurchargeCategory};
pub use holiday_calendar::{HolidayCalendar, PublicHoliday};
pub use shift_input::{MAX_SHIFT_HOURS, ShiftInput};
