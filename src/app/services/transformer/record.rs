//! Per-line field splitting and typed accessors
//!
//! Field semantics are positional: UTC timestamp, latitude, longitude, then
//! arbitrary passthrough fields. That contract is interpreted in this module
//! only; the rest of the pipeline works with the typed values or the verbatim
//! field slice.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::app::models::{GeoPoint, RowFailure};
use crate::constants::{
    FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_UTC_TIMESTAMP, UTC_TIMESTAMP_FORMAT,
};

/// One input line split into fields
///
/// Borrows from the source line; records never outlive the processing of the
/// line they were split from. The original field text is preserved verbatim
/// for output, while accessors trim before parsing so padded fields still
/// resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    /// Split a line into fields on the delimiter
    ///
    /// The split is literal: no quoting or escaping of embedded delimiters is
    /// supported.
    pub fn parse(line: &'a str, delimiter: char) -> Self {
        Self {
            fields: line.split(delimiter).collect(),
        }
    }

    /// All fields in input order, verbatim
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    fn field(&self, index: usize) -> Result<&'a str, RowFailure> {
        self.fields
            .get(index)
            .copied()
            .ok_or(RowFailure::TooFewFields {
                found: self.fields.len(),
            })
    }

    /// Parse the timestamp field as a UTC instant
    ///
    /// The field carries a naive date-time in the fixed format with no zone
    /// suffix; it is always interpreted as UTC.
    pub fn utc_instant(&self) -> Result<DateTime<Utc>, RowFailure> {
        let raw = self.field(FIELD_UTC_TIMESTAMP)?;
        NaiveDateTime::parse_from_str(raw.trim(), UTC_TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| RowFailure::MalformedTimestamp {
                value: raw.to_string(),
            })
    }

    /// Parse the latitude field as decimal degrees
    pub fn latitude(&self) -> Result<f64, RowFailure> {
        let raw = self.field(FIELD_LATITUDE)?;
        raw.trim()
            .parse()
            .map_err(|_| RowFailure::MalformedCoordinate {
                field: "latitude",
                value: raw.to_string(),
            })
    }

    /// Parse the longitude field as decimal degrees
    pub fn longitude(&self) -> Result<f64, RowFailure> {
        let raw = self.field(FIELD_LONGITUDE)?;
        raw.trim()
            .parse()
            .map_err(|_| RowFailure::MalformedCoordinate {
                field: "longitude",
                value: raw.to_string(),
            })
    }

    /// Parse both coordinate fields into a point
    pub fn geo_point(&self) -> Result<GeoPoint, RowFailure> {
        Ok(GeoPoint::new(self.latitude()?, self.longitude()?))
    }
}
