//! Configuration types for surcharge classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`SurchargeThresholds`] value injected into the classifier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{HOURS_PER_DAY, SLOT_HOURS};
use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

/// Metadata about a threshold profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMetadata {
    /// Short identifier of the profile (e.g., "night_21").
    pub code: String,
    /// Human-readable name of the profile.
    pub name: String,
    /// Where the thresholds come from.
    #[serde(default)]
    pub source: Option<String>,
}

/// Raw threshold values as written in `thresholds.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawThresholds {
    /// Length of the ordinary portion of a shift.
    pub ordinary_day_hours: Decimal,
    /// Clock hour at which the night window opens.
    pub night_start_hour: Decimal,
    /// Clock hour at which the night window closes.
    pub night_end_hour: Decimal,
}

/// Structure of `thresholds.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsFile {
    /// Profile metadata.
    pub profile: ProfileMetadata,
    /// Threshold values.
    pub thresholds: RawThresholds,
}

/// Structure of the optional `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// Listed public holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

/// Thresholds that drive the surcharge classifier.
///
/// One instance is built per process and never mutated. There is no default:
/// the night window differs between rule sets (21:00 and the older 19:00 start),
/// so every caller states which one applies.
///
/// # Example
///
/// ```
/// use surcharge_engine::config::SurchargeThresholds;
/// use rust_decimal::Decimal;
///
/// let thresholds = SurchargeThresholds::new(
///     Decimal::from(10),
///     Decimal::from(21),
///     Decimal::from(6),
/// ).unwrap();
/// assert!(thresholds.night_wraps_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurchargeThresholds {
    ordinary_day_hours: Decimal,
    night_start_hour: Decimal,
    night_end_hour: Decimal,
}

impl SurchargeThresholds {
    /// Creates validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidThresholds`] if:
    /// - `ordinary_day_hours` is not positive
    /// - `ordinary_day_hours` is not a whole number of half-hour slots
    /// - either night bound lies outside `[0, 24]`
    pub fn new(
        ordinary_day_hours: Decimal,
        night_start_hour: Decimal,
        night_end_hour: Decimal,
    ) -> EngineResult<Self> {
        if ordinary_day_hours <= Decimal::ZERO {
            return Err(EngineError::invalid_thresholds(
                "ordinary_day_hours",
                format!("must be positive, got {}", ordinary_day_hours.normalize()),
            ));
        }
        if !(ordinary_day_hours % SLOT_HOURS).is_zero() {
            return Err(EngineError::invalid_thresholds(
                "ordinary_day_hours",
                format!(
                    "must be a multiple of {} hours, got {}",
                    SLOT_HOURS.normalize(),
                    ordinary_day_hours.normalize()
                ),
            ));
        }
        Self::check_clock_hour("night_start_hour", night_start_hour)?;
        Self::check_clock_hour("night_end_hour", night_end_hour)?;

        Ok(Self {
            ordinary_day_hours,
            night_start_hour,
            night_end_hour,
        })
    }

    fn check_clock_hour(field: &str, value: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO || value > HOURS_PER_DAY {
            return Err(EngineError::invalid_thresholds(
                field,
                format!("must be within [0, 24], got {}", value.normalize()),
            ));
        }
        Ok(())
    }

    /// Length of the ordinary portion of any shift.
    pub fn ordinary_day_hours(&self) -> Decimal {
        self.ordinary_day_hours
    }

    /// Clock hour at which the night window opens.
    pub fn night_start_hour(&self) -> Decimal {
        self.night_start_hour
    }

    /// Clock hour at which the night window closes.
    pub fn night_end_hour(&self) -> Decimal {
        self.night_end_hour
    }

    /// Whether the night window crosses midnight (e.g. 21:00 to 06:00).
    pub fn night_wraps_midnight(&self) -> bool {
        self.night_start_hour > self.night_end_hour
    }
}

impl TryFrom<RawThresholds> for SurchargeThresholds {
    type Error = EngineError;

    fn try_from(raw: RawThresholds) -> EngineResult<Self> {
        Self::new(
            raw.ordinary_day_hours,
            raw.night_start_hour,
            raw.night_end_hour,
        )
    }
}
