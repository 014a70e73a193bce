//! Configuration loading and management for the Surcharge Engine.
//!
//! This module provides the validated [`SurchargeThresholds`] and the
//! functionality to load a threshold profile (and its holiday calendar)
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use surcharge_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/night_21").unwrap();
//! println!("Night window opens at {}", config.thresholds().night_start_hour());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidaysFile, ProfileMetadata, RawThresholds, SurchargeThresholds, ThresholdsFile,
};
