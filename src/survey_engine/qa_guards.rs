//! QA guards over a finished station sequence
//!
//! Three invariants every valid wellbore satisfies:
//! - **Monotonic MD**: measured depth strictly increases station to station
//! - **Physical bound**: TVD never exceeds MD at any station
//! - **Length sanity**: the along-hole length agrees (within 0.1% by default)
//!   with the 3D path through the stations, each chord between stations
//!   stretched back onto its minimum-curvature arc
//!
//! Plus DLS statistics over all segments. The guards are stateless and accept
//! any station sequence, planned or measured.

use std::cmp::Ordering;

use statrs::statistics::Statistics;

use super::minimum_curvature::{dogleg_angle, Attitude};
use crate::config::{self, QaConfig};
use crate::types::{Degrees, GuardResult, QaGuards, QaReport, SurveyState};

/// Evaluate with the global QA tolerances.
pub fn evaluate(stations: &[SurveyState]) -> QaReport {
    evaluate_with(stations, &config::get().qa)
}

/// Evaluate all guards and DLS statistics.
///
/// The first station is the tie-in and has no segment of its own, so it is
/// left out of the DLS statistics. An empty sequence passes every guard
/// vacuously with zero statistics.
pub fn evaluate_with(stations: &[SurveyState], cfg: &QaConfig) -> QaReport {
    let guards = QaGuards {
        monotonic_md: check_monotonic_md(stations),
        physical_bound: check_physical_bound(stations, cfg.physical_bound_tolerance),
        length_sanity: check_length_sanity(stations, cfg.length_sanity_max_relative_error),
    };

    let severities: Vec<f64> = stations.iter().skip(1).map(|s| s.dls).collect();
    let (max_dls, mean_dls, dls_std_dev) = dls_statistics(&severities);

    QaReport {
        max_dls,
        mean_dls,
        dls_std_dev,
        station_count: stations.len(),
        guards,
    }
}

/// (max, mean, sample std dev). statrs returns NaN below two samples, so the
/// short cases are answered directly.
fn dls_statistics(severities: &[f64]) -> (f64, f64, f64) {
    match severities {
        [] => (0.0, 0.0, 0.0),
        [only] => (*only, *only, 0.0),
        _ => (
            Statistics::max(severities),
            Statistics::mean(severities),
            Statistics::std_dev(severities),
        ),
    }
}

fn check_monotonic_md(stations: &[SurveyState]) -> GuardResult {
    for (i, pair) in stations.windows(2).enumerate() {
        // NaN compares as None and fails too
        if pair[1].md.partial_cmp(&pair[0].md) != Some(Ordering::Greater) {
            return GuardResult::fail(format!(
                "MD at station {} ({}) does not exceed station {} ({})",
                i + 1,
                pair[1].md,
                i,
                pair[0].md
            ));
        }
    }
    GuardResult::pass(format!("{} stations strictly increasing in MD", stations.len()))
}

fn check_physical_bound(stations: &[SurveyState], tolerance: f64) -> GuardResult {
    for (i, s) in stations.iter().enumerate() {
        // NaN fails the comparison and the guard
        let within = s.tvd <= s.md + tolerance;
        if !within {
            return GuardResult::fail(format!(
                "Station {i}: TVD {:.6} exceeds MD {:.6}",
                s.tvd, s.md
            ));
        }
    }
    GuardResult::pass("TVD never exceeds MD")
}

fn check_length_sanity(stations: &[SurveyState], max_relative_error: f64) -> GuardResult {
    let (Some(first), Some(last)) = (stations.first(), stations.last()) else {
        return GuardResult::pass("No stations");
    };
    if stations.len() < 2 {
        return GuardResult::pass("Single station, nothing to compare");
    }

    let along_hole = last.md - first.md;
    let path: f64 = stations.windows(2).map(|p| arc_length(&p[0], &p[1])).sum();

    let has_length = along_hole > 0.0;
    if !has_length {
        return GuardResult::fail(format!(
            "No along-hole length between first and last station (ΔMD = {along_hole})"
        ));
    }

    let relative = (along_hole - path).abs() / along_hole;
    let detail = format!(
        "Station path {path:.3} vs along-hole {along_hole:.3} ({:.4}% difference)",
        relative * 100.0
    );
    if relative < max_relative_error {
        GuardResult::pass(detail)
    } else {
        GuardResult::fail(detail)
    }
}

/// Length of the circular arc through two stations, from their straight-line
/// separation and the dogleg between their directions.
fn arc_length(a: &SurveyState, b: &SurveyState) -> f64 {
    let dn = b.north - a.north;
    let de = b.east - a.east;
    let dv = b.tvd - a.tvd;
    let chord = (dn * dn + de * de + dv * dv).sqrt();

    let half = dogleg_angle(&attitude(a), &attitude(b)).value() / 2.0;
    if half > 1e-12 {
        chord * half / half.sin()
    } else {
        chord
    }
}

fn attitude(s: &SurveyState) -> Attitude {
    Attitude::from_degrees(Degrees(s.inclination_deg), Degrees(s.azimuth_deg))
}
