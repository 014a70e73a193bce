//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a threshold
//! profile and its optional holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{HolidaysFile, ProfileMetadata, SurchargeThresholds, ThresholdsFile};

/// Loads and provides access to a threshold profile.
///
/// # Directory Structure
///
/// ```text
/// config/night_21/
/// ├── thresholds.yaml   # Profile metadata and threshold values
/// └── holidays.yaml     # Optional public holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use surcharge_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/night_21").unwrap();
/// println!("Loaded profile: {}", loader.profile().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: ProfileMetadata,
    thresholds: SurchargeThresholds,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified profile directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `thresholds.yaml` is missing
    /// - [`EngineError::ConfigParseError`] if any file contains invalid YAML
    /// - [`EngineError::InvalidThresholds`] if the threshold values are out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let thresholds_path = path.join("thresholds.yaml");
        let file = Self::load_yaml::<ThresholdsFile>(&thresholds_path)?;
        let thresholds = SurchargeThresholds::try_from(file.thresholds)?;

        // holidays.yaml is optional; a profile without one has an empty calendar
        let holidays_path = path.join("holidays.yaml");
        let calendar = if holidays_path.exists() {
            let holidays = Self::load_yaml::<HolidaysFile>(&holidays_path)?;
            HolidayCalendar::new(holidays.holidays)
        } else {
            HolidayCalendar::default()
        };

        info!(
            profile = %file.profile.code,
            ordinary_day_hours = %thresholds.ordinary_day_hours(),
            night_start_hour = %thresholds.night_start_hour(),
            night_end_hour = %thresholds.night_end_hour(),
            holidays = calendar.len(),
            "Loaded surcharge profile"
        );

        Ok(Self {
            profile: file.profile,
            thresholds,
            calendar,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        &self.profile
    }

    /// Returns the validated thresholds.
    pub fn thresholds(&self) -> SurchargeThresholds {
        self.thresholds
    }

    /// Returns the holiday calendar (empty if the profile has none).
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
