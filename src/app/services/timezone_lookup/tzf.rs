//! Embedded boundary-index implementation of [`TimezoneLookup`]
//!
//! Backed by `tzf-rs`, which ships a compressed build of the
//! timezone-boundary-builder polygon data and answers point queries without
//! any network access. The data includes the maritime `Etc/GMT±N` zones, so
//! open-ocean points resolve; only out-of-range or uncovered coordinates come
//! back empty.

use tracing::debug;
use tzf_rs::DefaultFinder;

use super::TimezoneLookup;

/// Timezone lookup over the embedded `tzf-rs` polygon index
///
/// Construction decodes the embedded boundary data and is comparatively
/// expensive; build one instance per process and share it by reference.
pub struct TzfTimezoneLookup {
    finder: DefaultFinder,
}

impl TzfTimezoneLookup {
    /// Build the lookup, decoding the embedded boundary index
    pub fn new() -> Self {
        let finder = DefaultFinder::new();
        debug!("timezone boundary index initialised");
        Self { finder }
    }
}

impl Default for TzfTimezoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfTimezoneLookup {
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<&str> {
        // tzf-rs takes longitude first and signals a miss with ""
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() { None } else { Some(name) }
    }
}
