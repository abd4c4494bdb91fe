//! Row transform pipeline
//!
//! This module implements the streaming, one-pass transform that augments
//! each input row with its IANA time zone and local timestamp. A line source
//! feeds the pipeline, a line sink receives its output, and every row is
//! processed independently:
//!
//! 1. Split the line into fields on the configured delimiter (literal split,
//!    no quoting support)
//! 2. Parse field 0 as a UTC timestamp in the fixed format
//! 3. Parse fields 1 and 2 as decimal latitude/longitude
//! 4. Resolve the coordinate to a time zone via the injected lookup
//! 5. Re-express the UTC instant in that zone's civil calendar
//! 6. Emit the original fields plus zone id and local time
//!
//! Any failure in steps 2-5 degrades the single affected row: its original
//! fields are emitted unchanged, followed by two empty fields, and the raw
//! fields are logged for diagnostics. Only sink write failures abort the
//! stream.
//!
//! # Module organisation
//!
//! - [`record`] - per-line field splitting and typed field accessors
//! - [`pipeline`] - the [`RowTransformer`] driving source to sink
//! - [`stats`] - per-stream counters and reporting

pub mod pipeline;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use pipeline::RowTransformer;
pub use record::RawRecord;
pub use stats::TransformStats;
