//! Tests for transform statistics

use crate::app::models::RowFailure;
use crate::app::services::transformer::TransformStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = TransformStats::new();
    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.output_rows(), 0);
    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.is_fully_transformed());
}

#[test]
fn test_record_failure_categorises() {
    let mut stats = TransformStats::new();

    stats.record_failure(&RowFailure::TooFewFields { found: 1 });
    stats.record_failure(&RowFailure::MalformedTimestamp {
        value: "x".to_string(),
    });
    stats.record_failure(&RowFailure::MalformedCoordinate {
        field: "latitude",
        value: "x".to_string(),
    });
    stats.record_failure(&RowFailure::ZoneNotFound {
        latitude: 0.0,
        longitude: -160.0,
    });
    stats.record_failure(&RowFailure::UnknownZone {
        zone_id: "Atlantis/Central".to_string(),
    });

    assert_eq!(stats.rows_degraded, 5);
    assert_eq!(stats.short_rows, 1);
    assert_eq!(stats.timestamp_failures, 1);
    assert_eq!(stats.coordinate_failures, 1);
    assert_eq!(stats.zones_not_found, 1);
    assert_eq!(stats.unknown_zones, 1);
    assert!(!stats.is_fully_transformed());
}

#[test]
fn test_success_rate() {
    let mut stats = TransformStats::new();
    stats.rows_transformed = 3;
    stats.record_failure(&RowFailure::ZoneNotFound {
        latitude: 0.0,
        longitude: 0.0,
    });

    assert_eq!(stats.output_rows(), 4);
    assert_eq!(stats.success_rate(), 75.0);
}

#[test]
fn test_merge_accumulates() {
    let mut total = TransformStats::new();
    total.lines_read = 10;
    total.blank_lines = 1;
    total.rows_transformed = 9;

    let mut other = TransformStats::new();
    other.lines_read = 5;
    other.rows_transformed = 3;
    other.record_failure(&RowFailure::TooFewFields { found: 2 });
    other.record_failure(&RowFailure::ZoneNotFound {
        latitude: 99.0,
        longitude: 0.0,
    });

    total.merge(&other);

    assert_eq!(total.lines_read, 15);
    assert_eq!(total.blank_lines, 1);
    assert_eq!(total.rows_transformed, 12);
    assert_eq!(total.rows_degraded, 2);
    assert_eq!(total.short_rows, 1);
    assert_eq!(total.zones_not_found, 1);
}

#[test]
fn test_summary_mentions_key_counts() {
    let mut stats = TransformStats::new();
    stats.lines_read = 4;
    stats.blank_lines = 1;
    stats.rows_transformed = 2;
    stats.record_failure(&RowFailure::TooFewFields { found: 1 });

    let summary = stats.summary();
    assert!(summary.contains("4 lines"));
    assert!(summary.contains("3 rows"));
    assert!(summary.contains("degraded: 1"));
}
