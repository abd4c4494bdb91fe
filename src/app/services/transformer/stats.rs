//! Stream statistics for transform operations
//!
//! Counters are tracked per stream and merged across files for the run-level
//! report. Degraded rows are broken down by failure reason so operators can
//! tell a bad export (timestamps) from a bad source (coordinates) at a
//! glance.

use serde::Serialize;

use crate::app::models::RowFailure;

/// Counters for one transform stream (or a merged run)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TransformStats {
    /// Total input lines read, including blank lines
    pub lines_read: usize,
    /// Blank lines skipped without producing output
    pub blank_lines: usize,
    /// Rows emitted with zone id and local time appended
    pub rows_transformed: usize,
    /// Rows emitted with two empty trailing fields
    pub rows_degraded: usize,
    /// Degraded: fewer than three fields
    pub short_rows: usize,
    /// Degraded: timestamp field unparseable
    pub timestamp_failures: usize,
    /// Degraded: latitude or longitude unparseable
    pub coordinate_failures: usize,
    /// Degraded: no timezone polygon contained the point
    pub zones_not_found: usize,
    /// Degraded: lookup answered with an identifier the tz database lacks
    pub unknown_zones: usize,
}

impl TransformStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degraded row under its failure reason
    pub fn record_failure(&mut self, failure: &RowFailure) {
        self.rows_degraded += 1;
        match failure {
            RowFailure::TooFewFields { .. } => self.short_rows += 1,
            RowFailure::MalformedTimestamp { .. } => self.timestamp_failures += 1,
            RowFailure::MalformedCoordinate { .. } => self.coordinate_failures += 1,
            RowFailure::ZoneNotFound { .. } => self.zones_not_found += 1,
            RowFailure::UnknownZone { .. } => self.unknown_zones += 1,
        }
    }

    /// Total output rows produced (one per non-blank input line)
    pub fn output_rows(&self) -> usize {
        self.rows_transformed + self.rows_degraded
    }

    /// Fraction of output rows that were fully transformed, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.output_rows() == 0 {
            100.0
        } else {
            (self.rows_transformed as f64 / self.output_rows() as f64) * 100.0
        }
    }

    /// True when every non-blank row was fully transformed
    pub fn is_fully_transformed(&self) -> bool {
        self.rows_degraded == 0
    }

    /// Fold another stream's counters into this one
    pub fn merge(&mut self, other: &TransformStats) {
        self.lines_read += other.lines_read;
        self.blank_lines += other.blank_lines;
        self.rows_transformed += other.rows_transformed;
        self.rows_degraded += other.rows_degraded;
        self.short_rows += other.short_rows;
        self.timestamp_failures += other.timestamp_failures;
        self.coordinate_failures += other.coordinate_failures;
        self.zones_not_found += other.zones_not_found;
        self.unknown_zones += other.unknown_zones;
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines -> {} rows ({:.1}% transformed) | degraded: {} | blank: {}",
            self.lines_read,
            self.output_rows(),
            self.success_rate(),
            self.rows_degraded,
            self.blank_lines
        )
    }
}
