//! # ADCP Sensor Channels
//!
//! This crate provides the typed data containers used to carry a single
//! physical measurement channel (pitch, roll, water temperature, salinity,
//! speed of sound, ...) through hydroacoustic discharge-measurement
//! processing. Each channel is held in a [`sensor::SensorData`] cell that
//! keeps the current working values alongside an untouched copy of the
//! values as first loaded, plus a free-text provenance label naming the
//! instrument or computational path that produced them.
//!
//! ## Crate Structure
//!
//! The library is organized into a small number of modules, each with a
//! distinct responsibility:
//!
//! - **`sensor`**: The [`sensor::SensorData`] cell itself — population,
//!   controlled mutation of the working values, and reconstruction from a
//!   previously saved processing session.
//! - **`session`**: The saved-session record contract
//!   ([`session::SensorRecord`]) together with the numeric-field coercion
//!   rules the external record format requires, and JSON helpers for
//!   reading and writing record files.
//! - **`error`**: The crate error type, [`error::SensorError`], for
//!   centralized error handling.
//!
//! Aggregation of many channels into an instrument-wide view, instrument
//! protocol parsing, and any presentation of the data are the concern of
//! downstream crates; this crate is the leaf data layer they build on.

pub mod error;
pub mod sensor;
pub mod session;

// Re-export commonly used types
pub use error::{SensorError, SensorResult};
pub use sensor::SensorData;
pub use session::{load_record, save_record, NumericField, SensorRecord};
