//! Built-in default constants.
//!
//! Every tunable in `TrajectoryConfig` falls back to one of these values
//! when no config file sets it. Grouped by subsystem.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "TRAJECTORY_CONFIG";

/// Config file looked up in the current working directory.
pub const CONFIG_FILE_NAME: &str = "trajectory_config.toml";

// ============================================================================
// Minimum Curvature
// ============================================================================

/// Dogleg (radians) at or below which the ratio factor is taken as 1.
///
/// `(2/β)·tan(β/2)` tends to 1 as β → 0 but evaluates 0/0 at zero.
pub const STRAIGHT_HOLE_DOGLEG_RAD: f64 = 1e-4;

// ============================================================================
// QA Guards
// ============================================================================

/// Slack allowed when checking TVD gained against MD gained.
pub const PHYSICAL_BOUND_TOLERANCE: f64 = 1e-6;

/// Largest accepted relative gap between along-hole length and the 3D
/// station path (0.1%).
pub const LENGTH_SANITY_MAX_RELATIVE_ERROR: f64 = 1e-3;

// ============================================================================
// Build-Hold Solver
// ============================================================================

/// First inclination tried by the bounded scan (degrees).
pub const SCAN_START_DEG: f64 = 0.1;

/// Last inclination tried by the bounded scan (degrees).
pub const SCAN_END_DEG: f64 = 90.0;

/// Inclination step of the bounded scan (degrees).
pub const SCAN_STEP_DEG: f64 = 0.1;

/// Hard cap on scan iterations. 0.1° to 90° in 0.1° steps is 900.
pub const MAX_SCAN_ITERATIONS: usize = 900;

/// Worst misalignment (degrees) between the hold direction and the line to
/// the target that the scan still accepts as a hit.
pub const FALLBACK_MAX_MISALIGNMENT_DEG: f64 = 0.5;

/// Start inclinations above this (degrees) count as non-vertical.
pub const VERTICAL_START_TOLERANCE_DEG: f64 = 1e-6;

/// Relative end-point error the closed-form answer must stay under.
pub const CLOSED_FORM_TOLERANCE: f64 = 1e-6;
