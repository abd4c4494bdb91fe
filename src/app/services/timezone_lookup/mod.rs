//! Coordinate-to-timezone resolution
//!
//! Mapping a geographic point to an IANA time zone requires a polygon index
//! over timezone boundary data. That engine is consumed here as an abstract
//! capability behind [`TimezoneLookup`] so the transform pipeline never
//! depends on a concrete geometry implementation and tests can substitute a
//! deterministic table.
//!
//! [`TzfTimezoneLookup`] is the production implementation, backed by the
//! embedded boundary index of the `tzf-rs` crate.

pub mod tzf;

#[cfg(test)]
pub mod tests;

pub use tzf::TzfTimezoneLookup;

/// Resolve geographic coordinates to an IANA time zone identifier
///
/// Implementations must be pure functions of their inputs: no observable side
/// effects, deterministic for fixed underlying boundary data.
pub trait TimezoneLookup {
    /// Find the time zone containing the given point
    ///
    /// # Arguments
    ///
    /// * `latitude` - decimal degrees, positive north of the equator
    /// * `longitude` - decimal degrees, positive east of the Greenwich meridian
    ///
    /// # Returns
    ///
    /// The IANA identifier of the matching zone (e.g. `Pacific/Auckland`), or
    /// `None` when no timezone polygon contains the point. Callers need not
    /// pre-validate ranges; out-of-range coordinates resolve to `None`.
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<&str>;
}

// Allow lookups to be injected by reference as well as by value.
impl<T: TimezoneLookup + ?Sized> TimezoneLookup for &T {
    fn resolve(&self, latitude: f64, longitude: f64) -> Option<&str> {
        (**self).resolve(latitude, longitude)
    }
}
