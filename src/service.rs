//! Injectable classification service.
//!
//! [`SurchargeService`] is the boundary callers go through: it holds the
//! process-wide thresholds and holiday calendar, validates raw input before
//! the pure classifier runs, and logs each decision.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::calculation::{SurchargeClassification, classify, classify_with_audit};
use crate::config::{ConfigLoader, SurchargeThresholds};
use crate::error::EngineResult;
use crate::models::{HolidayCalendar, ShiftInput, SurchargeBreakdown};

/// Shared, immutable classification service.
///
/// Cloning is cheap and clones share the same configuration, so one instance
/// can be handed to any number of concurrent callers.
///
/// # Example
///
/// ```
/// use surcharge_engine::config::SurchargeThresholds;
/// use surcharge_engine::service::SurchargeService;
/// use rust_decimal::Decimal;
///
/// let thresholds = SurchargeThresholds::new(
///     Decimal::from(10),
///     Decimal::from(21),
///     Decimal::from(6),
/// ).unwrap();
/// let service = SurchargeService::new(thresholds);
///
/// let breakdown = service.classify_hours(20.0, 28.0, false).unwrap();
/// assert_eq!(breakdown.rn, Decimal::from(9));
/// assert!(service.classify_hours(6.0, -1.0, false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SurchargeService {
    thresholds: SurchargeThresholds,
    calendar: Arc<HolidayCalendar>,
}

impl SurchargeService {
    /// Creates a service with an empty holiday calendar.
    pub fn new(thresholds: SurchargeThresholds) -> Self {
        Self::with_calendar(thresholds, HolidayCalendar::default())
    }

    /// Creates a service with the given holiday calendar.
    pub fn with_calendar(thresholds: SurchargeThresholds, calendar: HolidayCalendar) -> Self {
        Self {
            thresholds,
            calendar: Arc::new(calendar),
        }
    }

    /// Creates a service from a loaded profile.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::with_calendar(config.thresholds(), config.calendar().clone())
    }

    /// Returns the thresholds in use.
    pub fn thresholds(&self) -> &SurchargeThresholds {
        &self.thresholds
    }

    /// Returns the holiday calendar in use.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Classifies an already validated shift.
    pub fn classify(&self, shift: &ShiftInput) -> SurchargeBreakdown {
        let breakdown = classify(shift, &self.thresholds);
        debug!(
            start_hour = %shift.start_hour(),
            total_hours = %shift.total_hours(),
            is_holiday_or_sunday = shift.is_holiday_or_sunday(),
            overtime_hours = %breakdown.overtime_hours(),
            rn = %breakdown.rn,
            rd = %breakdown.rd,
            "Classified shift"
        );
        breakdown
    }

    /// Validates and classifies a `(start_hour, total_hours, holiday)` tuple.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// for non-finite values, a negative duration, or magnitudes above
    /// [`MAX_SHIFT_HOURS`](crate::models::MAX_SHIFT_HOURS).
    pub fn classify_hours(
        &self,
        start_hour: f64,
        total_hours: f64,
        is_holiday_or_sunday: bool,
    ) -> EngineResult<SurchargeBreakdown> {
        let shift = ShiftInput::from_f64(start_hour, total_hours, is_holiday_or_sunday)
            .inspect_err(|err| {
                warn!(start_hour, total_hours, error = %err, "Rejected shift input");
            })?;
        Ok(self.classify(&shift))
    }

    /// Classifies a shift given by wall-clock start and end times.
    ///
    /// The holiday flag comes from the start date and the service's calendar.
    pub fn classify_times(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<SurchargeBreakdown> {
        let shift = ShiftInput::from_times(start, end, &self.calendar).inspect_err(|err| {
            warn!(%start, %end, error = %err, "Rejected shift times");
        })?;
        Ok(self.classify(&shift))
    }

    /// Classifies a shift and returns the audit step alongside the breakdown.
    pub fn classify_with_audit(
        &self,
        shift: &ShiftInput,
        step_number: u32,
    ) -> SurchargeClassification {
        classify_with_audit(shift, &self.thresholds, step_number)
    }
}
