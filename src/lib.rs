//! Tracetime Library
//!
//! A Rust library for augmenting GPS trace CSV data with IANA time zone
//! identifiers and localised timestamps.
//!
//! Each input line carries a UTC timestamp, a latitude and a longitude in its
//! first three fields. The library resolves the coordinate to a time zone via
//! an embedded boundary-polygon index, converts the UTC instant to that zone's
//! wall-clock time, and appends both values to the line. Rows that cannot be
//! processed are emitted with two empty trailing fields so no input data is
//! ever lost.
//!
//! This library provides tools for:
//! - Streaming, one-pass transformation of delimiter-separated trace files
//! - Coordinate-to-timezone resolution behind a swappable lookup trait
//! - Timezone-aware conversion of UTC instants to local civil time
//! - Per-row graceful degradation with diagnostic logging and statistics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod timezone_lookup;
        pub mod transformer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GeoPoint, RowFailure};
pub use app::services::timezone_lookup::{TimezoneLookup, TzfTimezoneLookup};
pub use app::services::transformer::{RowTransformer, TransformStats};
pub use config::TransformOptions;

/// Result type alias for tracetime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fatal, stream-level failures
///
/// Per-row problems (malformed fields, unresolvable coordinates) are not
/// errors in this sense; they degrade the affected row and are tracked in
/// [`TransformStats`]. Only conditions that make continuing pointless or
/// unsafe surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading from an input source failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output sink failed; continuing would silently drop rows
    #[error("output write failed: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },

    /// Configuration or argument error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error during input discovery
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// A row degraded while running in fail-fast mode
    #[error("row {line} could not be transformed: {reason}")]
    RowDegraded { line: usize, reason: String },

    /// No time zone contains the queried coordinate
    #[error("no time zone found for ({latitude}, {longitude})")]
    ZoneNotFound { latitude: f64, longitude: f64 },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(source: std::io::Error) -> Self {
        Self::OutputWrite { source }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a fail-fast row degradation error
    pub fn row_degraded(line: usize, reason: impl Into<String>) -> Self {
        Self::RowDegraded {
            line,
            reason: reason.into(),
        }
    }

    /// Create a zone not found error
    pub fn zone_not_found(latitude: f64, longitude: f64) -> Self {
        Self::ZoneNotFound {
            latitude,
            longitude,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
