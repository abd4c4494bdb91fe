//! Tests for the timezone lookup service
//!
//! The trait contract is exercised against [`MockTimezoneLookup`], a
//! deterministic table over a handful of bounding boxes; the `tzf-rs` adapter
//! is covered by the crate-level integration tests, which pay its
//! initialisation cost once.

use super::TimezoneLookup;

mod contract_tests;

/// Deterministic lookup used across the unit test suites
///
/// Resolves a few coarse bounding boxes to fixed zone identifiers and
/// everything else to no match. Coarse is fine here: the boxes only need to
/// contain the test coordinates, not trace real boundaries.
#[derive(Debug, Clone, Default)]
pub struct MockTimezoneLookup;

impl TimezoneLookup for MockTimezoneLookup {
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<&str> {
        if (-48.0..=-34.0).contains(&latitude) && (166.0..=179.0).contains(&longitude) {
            Some("Pacific/Auckland")
        } else if (-38.0..=-28.0).contains(&latitude) && (140.0..=154.0).contains(&longitude) {
            Some("Australia/Sydney")
        } else if (49.0..=61.0).contains(&latitude) && (-8.0..=2.0).contains(&longitude) {
            Some("Europe/London")
        } else {
            None
        }
    }
}

/// Lookup that always answers with an identifier the tz database rejects
#[derive(Debug, Clone, Default)]
pub struct BogusZoneLookup;

impl TimezoneLookup for BogusZoneLookup {
    fn resolve(&self, _latitude: f64, _longitude: f64) -> Option<&str> {
        Some("Atlantis/Central")
    }
}
