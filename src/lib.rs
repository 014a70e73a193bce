//! Surcharge Engine for labour-time pay categories
//!
//! This crate partitions a work shift into night surcharge, Sunday/holiday
//! surcharge and daytime/night overtime hours, with ordinary-day length and
//! night window supplied as configuration.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
