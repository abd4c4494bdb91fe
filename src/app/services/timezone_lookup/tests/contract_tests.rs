//! Contract tests for [`TimezoneLookup`] implementations

use super::{MockTimezoneLookup, TimezoneLookup};

#[test]
fn test_resolves_known_regions() {
    let lookup = MockTimezoneLookup;

    assert_eq!(
        lookup.resolve(-44.490947, 171.220966),
        Some("Pacific/Auckland")
    );
    assert_eq!(
        lookup.resolve(-33.912167, 151.215820),
        Some("Australia/Sydney")
    );
    assert_eq!(lookup.resolve(51.4816, -0.0077), Some("Europe/London"));
}

#[test]
fn test_uncovered_point_is_not_found() {
    let lookup = MockTimezoneLookup;

    // Mid-Pacific, outside every configured box
    assert_eq!(lookup.resolve(0.0, -160.0), None);
}

#[test]
fn test_out_of_range_coordinates_are_not_found() {
    let lookup = MockTimezoneLookup;

    // Swapped latitude/longitude produce an impossible latitude; the
    // contract passes them through rather than pre-validating.
    assert_eq!(lookup.resolve(151.215820, -33.912167), None);
}

#[test]
fn test_deterministic_for_fixed_data() {
    let lookup = MockTimezoneLookup;

    let first = lookup.resolve(-44.490947, 171.220966);
    let second = lookup.resolve(-44.490947, 171.220966);
    assert_eq!(first, second);
}

#[test]
fn test_resolve_through_reference() {
    fn resolve_with<L: TimezoneLookup>(lookup: L, lat: f64, lon: f64) -> Option<String> {
        lookup.resolve(lat, lon).map(str::to_string)
    }

    // The blanket impl lets callers inject a borrowed lookup.
    let lookup = MockTimezoneLookup;
    assert_eq!(
        resolve_with(&lookup, -44.490947, 171.220966),
        Some("Pacific/Auckland".to_string())
    );
}
