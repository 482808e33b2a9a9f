//! Saved-session records for sensor channels.
//!
//! Processing sessions are saved by collaborator components and reloaded
//! later to restore a channel without re-reading the instrument. This
//! module defines the record contract a saved channel must satisfy and the
//! JSON helpers for reading and writing record files.
//!
//! ## Record Contract
//!
//! A [`SensorRecord`] exposes exactly three fields:
//!
//! - **`data`**: the current working values at the time the session was
//!   saved.
//! - **`dataOrig`**: the values as first loaded (the wire spells this field
//!   in camel case; in Rust it is `data_orig`).
//! - **`source`**: the provenance label, copied verbatim.
//!
//! The wire format types the two value fields loosely: a field may be a
//! single scalar, a sequence, or a run of undefined markers standing in for
//! "no data". [`NumericField`] captures that shape as written; collapsing
//! all-undefined fields to the canonical empty sequence happens when a cell
//! is populated from the record (see
//! [`crate::sensor::SensorData::populate_from_record`]).
//!
//! Records that do not satisfy the contract at all — a string where a
//! numeric field belongs — fail to decode and surface as
//! [`SensorError::Record`](crate::error::SensorError). Adapters translating
//! other saved-session container formats into [`SensorRecord`] are expected
//! to enforce field presence themselves; nothing downstream of the decode
//! re-validates.

use crate::error::SensorResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A numeric record field as the external format writes it.
///
/// Saved records encode a value field either as a single scalar or as a
/// sequence, and use an undefined marker (JSON `null`) for missing
/// measurements. A scalar is promoted to a one-element sequence by
/// [`NumericField::values`]; whether upstream producers write scalars
/// intentionally or by accident is unresolved, so the promotion mirrors
/// what they get today and is kept visible here for review against real
/// record files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    /// A single value, or the undefined marker.
    Scalar(Option<f64>),
    /// A sequence of values, each possibly the undefined marker.
    Sequence(Vec<Option<f64>>),
}

impl NumericField {
    /// Coerces the field to a sequence of floats.
    ///
    /// Scalars become a one-element sequence. Undefined markers are carried
    /// through as `f64::NAN`, preserving the order and length of the field
    /// as written.
    pub fn values(&self) -> Vec<f64> {
        match self {
            NumericField::Scalar(value) => vec![value.unwrap_or(f64::NAN)],
            NumericField::Sequence(values) => values
                .iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect(),
        }
    }

    /// Returns `true` when the field carries no defined value at all.
    ///
    /// An empty sequence, a lone undefined marker, and a sequence of
    /// nothing but undefined markers all count as undefined.
    pub fn is_undefined(&self) -> bool {
        match self {
            NumericField::Scalar(value) => value.map_or(true, f64::is_nan),
            NumericField::Sequence(values) => {
                values.iter().all(|value| value.map_or(true, f64::is_nan))
            }
        }
    }
}

/// One sensor channel as stored in a saved processing session.
///
/// Field names follow the wire format; all three fields are optional so a
/// record saved before a channel had data still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Current working values at save time.
    #[serde(default)]
    pub data: Option<NumericField>,
    /// Values as first loaded.
    #[serde(rename = "dataOrig", default)]
    pub data_orig: Option<NumericField>,
    /// Provenance label, copied verbatim.
    #[serde(default)]
    pub source: Option<String>,
}

/// Saves a sensor record to a JSON file.
///
/// Undefined markers (`f64::NAN`) are written as JSON `null`, which
/// [`load_record`] maps back to the marker.
pub fn save_record(record: &SensorRecord, path: &Path) -> SensorResult<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    log::debug!("Saved sensor record to {}", path.display());
    Ok(())
}

/// Loads a sensor record from a JSON file.
pub fn load_record(path: &Path) -> SensorResult<SensorRecord> {
    let json = fs::read_to_string(path)?;
    let record = serde_json::from_str(&json)?;
    log::debug!("Loaded sensor record from {}", path.display());
    Ok(record)
}
