//! Application constants for tracetime
//!
//! This module contains the field contract, timestamp formats, and default
//! values used throughout the transform pipeline.

// =============================================================================
// Field Contract
// =============================================================================

/// Position of the UTC timestamp field within an input row
pub const FIELD_UTC_TIMESTAMP: usize = 0;

/// Position of the latitude field within an input row
pub const FIELD_LATITUDE: usize = 1;

/// Position of the longitude field within an input row
pub const FIELD_LONGITUDE: usize = 2;

/// Minimum number of fields a row must carry to be transformable
pub const MIN_FIELD_COUNT: usize = 3;

/// Number of fields appended to every output row (zone id, local time)
pub const APPENDED_FIELD_COUNT: usize = 2;

// =============================================================================
// Formats and Delimiters
// =============================================================================

/// Default field delimiter for input and output rows
pub const DEFAULT_DELIMITER: char = ',';

/// Fixed parse format for the UTC timestamp field (no zone suffix, always UTC)
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed output format for the appended local timestamp field
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// File extension recognised when discovering inputs inside a directory
pub const TRACE_FILE_EXTENSION: &str = "csv";
