//! Single-channel sensor data cell.
//!
//! A [`SensorData`] cell holds one measurement channel for an instrument:
//! the current working values, an untouched copy of the values as first
//! loaded, and a free-text label naming the source that produced them
//! (for example `"internal"`, `"external"`, or `"user"`). Correction steps
//! downstream replace the working values through [`SensorData::change_data`]
//! while the as-loaded copy stays available as the baseline for comparison
//! or undo.
//!
//! Cells start out empty and are populated either directly from values and
//! a source label, or from a previously saved processing session via
//! [`SensorData::populate_from_record`]. Saved records may encode "no data"
//! as a run of undefined markers rather than a true empty sequence; record
//! population collapses that representation to an empty sequence so callers
//! have a single canonical "no data" state to test for.

use crate::session::{NumericField, SensorRecord};

/// Data and provenance for one measurement channel.
///
/// The working values and the as-loaded values are always independent
/// buffers: replacing the working values never touches the as-loaded copy.
/// All fields are unset on a freshly constructed cell, which is the state
/// callers observe before any data has been loaded for the channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorData {
    /// Current working values, subject to correction by processing steps.
    data: Option<Vec<f64>>,
    /// Values as first loaded. Only a full re-population replaces these.
    data_orig: Option<Vec<f64>>,
    /// Label naming the physical or computational source of the values.
    source: Option<String>,
}

impl SensorData {
    /// Creates an empty cell with no data and no source label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the cell from values and a source label.
    ///
    /// Both the working values and the as-loaded copy are set to `values`,
    /// as two independent buffers. Repeated calls fully overwrite any prior
    /// state, including the as-loaded copy.
    pub fn populate_data(&mut self, values: Vec<f64>, source: impl Into<String>) {
        self.data_orig = Some(values.clone());
        self.data = Some(values);
        self.source = Some(source.into());
    }

    /// Populates the cell from a saved-session record.
    ///
    /// The record's current and original value fields are normalized
    /// independently: a field that is absent or consists entirely of
    /// undefined markers becomes an empty sequence, anything else is
    /// coerced to a sequence of floats with order and length preserved
    /// (partially defined sequences keep their undefined elements). The
    /// record's source label is copied verbatim.
    pub fn populate_from_record(&mut self, record: &SensorRecord) {
        self.data = Some(normalize(record.data.as_ref()));
        self.data_orig = Some(normalize(record.data_orig.as_ref()));
        self.source = record.source.clone();
    }

    /// Replaces the working values, leaving the as-loaded copy and the
    /// source label untouched.
    pub fn change_data(&mut self, values: Vec<f64>) {
        self.data = Some(values);
    }

    /// Replaces the source label, leaving both value sequences untouched.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Current working values, or `None` if the cell has not been populated.
    pub fn data(&self) -> Option<&[f64]> {
        self.data.as_deref()
    }

    /// Values as first loaded, or `None` if the cell has not been populated.
    pub fn original_data(&self) -> Option<&[f64]> {
        self.data_orig.as_deref()
    }

    /// Source label, or `None` if no source has been set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Collapses an absent or all-undefined record field to an empty sequence.
fn normalize(field: Option<&NumericField>) -> Vec<f64> {
    match field {
        Some(field) if !field.is_undefined() => field.values(),
        _ => Vec::new(),
    }
}
