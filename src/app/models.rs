//! Core data models for the transform pipeline
//!
//! Every type here lives for the duration of a single row's processing and is
//! discarded once the output line has been written. Nothing is shared between
//! rows.

use thiserror::Error;

/// A geographic point in decimal degrees
///
/// Latitude is positive north of the equator, longitude positive east of the
/// Greenwich meridian. Values are carried through unvalidated; the timezone
/// lookup reports out-of-range or uncovered points as not found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Reason a row could not be fully transformed
///
/// These are expected per-row outcomes, not stream errors: the affected row is
/// emitted with two empty trailing fields and processing continues. Each
/// parsing and resolution step yields one of these on failure, and ordinary
/// control flow combines them into the degraded output shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowFailure {
    /// Row has fewer fields than the timestamp/latitude/longitude contract
    #[error("row has {found} fields, expected at least 3")]
    TooFewFields { found: usize },

    /// Timestamp field did not match the fixed UTC format
    #[error("timestamp '{value}' does not match YYYY-MM-DD HH:MM:SS")]
    MalformedTimestamp { value: String },

    /// Latitude or longitude field was not parseable as a decimal number
    #[error("{field} '{value}' is not a decimal number")]
    MalformedCoordinate {
        field: &'static str,
        value: String,
    },

    /// No timezone polygon contains the coordinate
    #[error("no time zone contains ({latitude}, {longitude})")]
    ZoneNotFound { latitude: f64, longitude: f64 },

    /// The lookup returned an identifier missing from the tz database
    #[error("unknown time zone identifier '{zone_id}'")]
    UnknownZone { zone_id: String },
}
