//! Minimum Curvature Integration Tests
//!
//! Measured-station scenarios through the public API: straight holes,
//! wellhead offsets, skipped records and the survey listing handed to QA.

use well_trajectory::config::SurveyConfig;
use well_trajectory::survey_engine::compute_trajectory_with;
use well_trajectory::types::SkipReason;
use well_trajectory::{evaluate, survey_listing, CourseLength, SurveyStation, WellHead};

fn stations(rows: &[(f64, f64, f64)]) -> Vec<SurveyStation> {
    rows.iter()
        .map(|&(md, inc, azm)| SurveyStation::new(md, inc, azm))
        .collect()
}

// ============================================================================
// Straight hole
// ============================================================================

#[test]
fn vertical_thousand_feet_lands_under_wellhead() {
    let run = compute_trajectory_with(
        &stations(&[(0.0, 0.0, 0.0), (1000.0, 0.0, 0.0)]),
        &WellHead::ORIGIN,
        &SurveyConfig::default(),
    )
    .unwrap();

    assert_eq!(run.points.len(), 2);
    let p = &run.points[1];
    assert_eq!((p.x, p.y), (0.0, 0.0));
    assert!((p.z - 1000.0).abs() < 1e-9);
    assert!(run.is_clean());
}

#[test]
fn zero_inclination_keeps_tvd_equal_to_md() {
    // Azimuth is meaningless while vertical and must not move the hole
    let run = compute_trajectory_with(
        &stations(&[
            (0.0, 0.0, 0.0),
            (120.0, 0.0, 45.0),
            (480.0, 0.0, 270.0),
            (1500.0, 0.0, 10.0),
        ]),
        &WellHead::ORIGIN,
        &SurveyConfig::default(),
    )
    .unwrap();

    for p in &run.points {
        assert!((p.z - p.md).abs() < 1e-9, "TVD {} vs MD {}", p.z, p.md);
        assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12);
    }
}

#[test]
fn single_station_yields_only_wellhead() {
    let head = WellHead::new(10.0, 20.0, 5.0);
    let run = compute_trajectory_with(
        &stations(&[(0.0, 0.0, 0.0)]),
        &head,
        &SurveyConfig::default(),
    )
    .unwrap();

    assert_eq!(run.points.len(), 1);
    let p = &run.points[0];
    assert_eq!((p.x, p.y, p.z), (10.0, 20.0, 5.0));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = stations(&[
        (0.0, 0.0, 0.0),
        (500.0, 4.5, 37.0),
        (900.0, 18.25, 41.5),
        (1400.0, 33.0, 44.0),
        (2100.0, 33.0, 44.0),
    ]);
    let cfg = SurveyConfig::default();
    let first = compute_trajectory_with(&input, &WellHead::ORIGIN, &cfg).unwrap();
    let second = compute_trajectory_with(&input, &WellHead::ORIGIN, &cfg).unwrap();

    assert_eq!(first.points.len(), second.points.len());
    for (a, b) in first.points.iter().zip(&second.points) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }
}

// ============================================================================
// Bad records
// ============================================================================

#[test]
fn bad_stations_are_skipped_and_reported() {
    let input = vec![
        SurveyStation::new(0.0, 0.0, 0.0),
        SurveyStation::new(500.0, 2.0, 90.0),
        SurveyStation::new(f64::NAN, 2.0, 90.0),
        SurveyStation::new(400.0, 3.0, 90.0),
        SurveyStation::new(800.0, 5.0, 90.0),
    ];
    let run = compute_trajectory_with(&input, &WellHead::ORIGIN, &SurveyConfig::default()).unwrap();

    assert_eq!(run.points.len(), 3);
    assert_eq!(run.skipped.len(), 2);
    assert_eq!(run.skipped[0].index, 2);
    assert_eq!(run.skipped[0].reason, SkipReason::NonFiniteValue);
    assert_eq!(run.skipped[1].index, 3);
    assert_eq!(run.skipped[1].reason, SkipReason::NonIncreasingDepth);
    assert!((run.final_point().unwrap().md - 800.0).abs() < 1e-12);
}

#[test]
fn empty_station_list_is_invalid_input() {
    let err = compute_trajectory_with(&[], &WellHead::ORIGIN, &SurveyConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid input"));
}

// ============================================================================
// Listing into QA
// ============================================================================

#[test]
fn measured_build_survey_passes_qa() {
    // 3°/100ft build from 1000 ft to 30° then hold, surveyed every 100 ft
    let mut rows = vec![(0.0, 0.0, 0.0), (1000.0, 0.0, 60.0)];
    for k in 1..=10 {
        rows.push((1000.0 + 100.0 * f64::from(k), 3.0 * f64::from(k), 60.0));
    }
    rows.push((3000.0, 30.0, 60.0));

    let run = compute_trajectory_with(&stations(&rows), &WellHead::ORIGIN, &SurveyConfig::default())
        .unwrap();
    let listing = survey_listing(&run.points, CourseLength::IMPERIAL, 0.0);
    let report = evaluate(&listing);

    assert!(report.passed(), "{report:?}");
    assert!((report.max_dls - 3.0).abs() < 1e-6);
    assert_eq!(report.station_count, listing.len());

    let last = listing.last().unwrap();
    assert!((last.closure_azimuth_deg - 60.0).abs() < 1e-6);
    assert!(last.tvd < last.md);
}
