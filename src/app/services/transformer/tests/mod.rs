//! Test helpers for the transformer suites
//!
//! Pipelines run against the deterministic mock lookup so expectations stay
//! stable regardless of the embedded boundary data; the real index is covered
//! by the crate-level integration tests.

use crate::app::services::timezone_lookup::tests::MockTimezoneLookup;
use crate::config::TransformOptions;

use super::RowTransformer;
use super::stats::TransformStats;

mod stats_tests;

/// Run `input` through a transformer with default options and the mock
/// lookup, returning the produced output and statistics
pub fn transform_to_string(input: &str) -> (String, TransformStats) {
    transform_with_options(input, TransformOptions::default())
}

/// Run `input` through a transformer with explicit options and the mock
/// lookup
pub fn transform_with_options(
    input: &str,
    options: TransformOptions,
) -> (String, TransformStats) {
    let transformer = RowTransformer::with_options(MockTimezoneLookup, options);
    let mut output = Vec::new();
    let stats = transformer
        .transform(input.as_bytes(), &mut output)
        .expect("transform should not fail on in-memory streams");
    (
        String::from_utf8(output).expect("output should be valid UTF-8"),
        stats,
    )
}
