//! Quality-assurance report types

use serde::{Deserialize, Serialize};

/// Outcome of one QA guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardResult {
    pub pass: bool,
    /// Human-readable explanation, naming the first offending station on failure
    pub detail: String,
}

impl GuardResult {
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            pass: true,
            detail: detail.into(),
        }
    }

    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            pass: false,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaGuards {
    /// MD strictly increasing station to station
    pub monotonic_md: GuardResult,
    /// TVD gained never exceeds MD gained
    pub physical_bound: GuardResult,
    /// Along-hole length agrees with the 3D station path
    pub length_sanity: GuardResult,
}

impl QaGuards {
    pub fn all_pass(&self) -> bool {
        self.monotonic_md.pass && self.physical_bound.pass && self.length_sanity.pass
    }
}

/// QA summary over a complete station sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaReport {
    /// Highest per-segment DLS (deg / course length)
    pub max_dls: f64,
    pub mean_dls: f64,
    /// Sample standard deviation of per-segment DLS
    pub dls_std_dev: f64,
    pub station_count: usize,
    pub guards: QaGuards,
}

impl QaReport {
    pub fn passed(&self) -> bool {
        self.guards.all_pass()
    }
}
