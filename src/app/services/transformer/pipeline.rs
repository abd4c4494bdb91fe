//! The row transformer driving source to sink
//!
//! Single-threaded, pull-based: each line is read, transformed and written
//! before the next is read. No state is shared between rows, so the per-row
//! work is pure apart from the terminal write.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use crate::app::models::RowFailure;
use crate::app::services::timezone_lookup::TimezoneLookup;
use crate::config::TransformOptions;
use crate::constants::LOCAL_TIMESTAMP_FORMAT;
use crate::{Error, Result};

use super::record::RawRecord;
use super::stats::TransformStats;

/// Zone identifier and formatted local time appended to a transformed row
struct Augmentation {
    zone_id: String,
    local_time: String,
}

/// Streaming row transformer over an injected timezone lookup
///
/// The transformer borrows its input and output streams per call and never
/// owns their lifecycle: callers open, flush and close on every exit path.
pub struct RowTransformer<L: TimezoneLookup> {
    lookup: L,
    options: TransformOptions,
}

impl<L: TimezoneLookup> RowTransformer<L> {
    /// Create a transformer with default options
    pub fn new(lookup: L) -> Self {
        Self::with_options(lookup, TransformOptions::default())
    }

    /// Create a transformer with explicit options
    pub fn with_options(lookup: L, options: TransformOptions) -> Self {
        Self { lookup, options }
    }

    /// Transform every line from `reader`, writing output rows to `writer`
    ///
    /// Blank lines are skipped; every other input line produces exactly one
    /// output line, in input order. Rows that cannot be transformed are
    /// emitted with their original fields followed by two empty fields, and
    /// counted in the returned statistics.
    ///
    /// # Errors
    ///
    /// Fatal only: a failed read from `reader`, a failed write to `writer`,
    /// or (with `fail_fast` set) the first row that would degrade.
    pub fn transform<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<TransformStats> {
        let mut stats = TransformStats::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| {
                Error::io(format!("failed to read input line {}", line_number), e)
            })?;
            stats.lines_read += 1;

            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let record = RawRecord::parse(&line, self.options.delimiter);
            match self.augment(&record) {
                Ok(augmentation) => {
                    self.write_transformed(writer, &record, &augmentation)?;
                    stats.rows_transformed += 1;
                }
                Err(failure) => {
                    warn!(
                        "row {} degraded ({}): {:?}",
                        line_number,
                        failure,
                        record.fields()
                    );
                    if self.options.fail_fast {
                        return Err(Error::row_degraded(line_number, failure.to_string()));
                    }
                    self.write_degraded(writer, &record)?;
                    stats.record_failure(&failure);
                }
            }
        }

        info!("transform complete: {}", stats.summary());
        Ok(stats)
    }

    /// Run the per-row steps, producing the appended values or the reason
    /// the row cannot be transformed
    fn augment(&self, record: &RawRecord<'_>) -> std::result::Result<Augmentation, RowFailure> {
        let instant = record.utc_instant()?;
        let point = record.geo_point()?;

        let zone_id = self
            .lookup
            .resolve(point.latitude, point.longitude)
            .ok_or(RowFailure::ZoneNotFound {
                latitude: point.latitude,
                longitude: point.longitude,
            })?;

        let local_time = localise(instant, zone_id)?;
        debug!(
            "({}, {}) -> {} {}",
            point.latitude, point.longitude, zone_id, local_time
        );

        Ok(Augmentation {
            zone_id: zone_id.to_string(),
            local_time,
        })
    }

    fn write_transformed<W: Write>(
        &self,
        writer: &mut W,
        record: &RawRecord<'_>,
        augmentation: &Augmentation,
    ) -> Result<()> {
        let delimiter = self.options.delimiter;
        for field in record.fields() {
            write!(writer, "{}{}", field, delimiter).map_err(Error::output_write)?;
        }
        writeln!(
            writer,
            "{}{}{}",
            augmentation.zone_id, delimiter, augmentation.local_time
        )
        .map_err(Error::output_write)
    }

    fn write_degraded<W: Write>(&self, writer: &mut W, record: &RawRecord<'_>) -> Result<()> {
        let delimiter = self.options.delimiter;
        for field in record.fields() {
            write!(writer, "{}{}", field, delimiter).map_err(Error::output_write)?;
        }
        // The trailing delimiter after the last original field plus this one
        // form the two empty fields.
        writeln!(writer, "{}", delimiter).map_err(Error::output_write)
    }
}

/// Re-express a UTC instant as wall-clock time in the named zone
///
/// The conversion runs UTC to local only, which the tz rules define for every
/// instant; daylight-saving folds and gaps arise solely in the opposite
/// direction and are never encountered here.
fn localise(instant: DateTime<Utc>, zone_id: &str) -> std::result::Result<String, RowFailure> {
    let zone = Tz::from_str(zone_id).map_err(|_| RowFailure::UnknownZone {
        zone_id: zone_id.to_string(),
    })?;
    Ok(instant
        .with_timezone(&zone)
        .format(LOCAL_TIMESTAMP_FORMAT)
        .to_string())
}
