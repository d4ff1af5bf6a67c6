//! Trajectory Configuration - numeric tolerances as operator-tunable TOML values
//!
//! Each section implements `Default` with the values in `defaults.rs`, so a
//! missing file or a partial file behaves exactly like the built-in constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the survey engine.
///
/// Load with `TrajectoryConfig::load()` which searches:
/// 1. `$TRAJECTORY_CONFIG` env var
/// 2. `./trajectory_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Minimum-curvature tuning
    #[serde(default)]
    pub survey: SurveyConfig,

    /// QA guard tolerances
    #[serde(default)]
    pub qa: QaConfig,

    /// Build-hold solver limits
    #[serde(default)]
    pub solver: SolverConfig,
}

impl TrajectoryConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TRAJECTORY_CONFIG` environment variable
    /// 2. `./trajectory_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded trajectory config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load trajectory config, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(defaults::CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded trajectory config from ./{}", defaults::CONFIG_FILE_NAME);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::CONFIG_FILE_NAME);
                }
            }
        }

        info!("No trajectory config found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings and never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Trajectory config saved");
        Ok(())
    }

    /// Validate every tolerance for internal consistency.
    ///
    /// Rules:
    /// - All values finite
    /// - Tolerances and steps positive
    /// - Scan window ordered and within 0-90°
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let s = &self.solver;
        if s.scan_start_deg >= s.scan_end_deg {
            errors.push(format!(
                "solver.scan_start_deg ({:.2}) must be less than scan_end_deg ({:.2})",
                s.scan_start_deg, s.scan_end_deg
            ));
        }
        if s.max_scan_iterations == 0 {
            errors.push("solver.max_scan_iterations must be > 0".to_string());
        }

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                errors.push(format!("{name} must be a finite number, got {value}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn float_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("survey.straight_hole_dogleg_rad", self.survey.straight_hole_dogleg_rad),
            ("qa.physical_bound_tolerance", self.qa.physical_bound_tolerance),
            ("qa.length_sanity_max_relative_error", self.qa.length_sanity_max_relative_error),
            ("solver.scan_start_deg", self.solver.scan_start_deg),
            ("solver.scan_end_deg", self.solver.scan_end_deg),
            ("solver.scan_step_deg", self.solver.scan_step_deg),
            ("solver.fallback_max_misalignment_deg", self.solver.fallback_max_misalignment_deg),
            ("solver.vertical_start_tolerance_deg", self.solver.vertical_start_tolerance_deg),
            ("solver.closed_form_tolerance", self.solver.closed_form_tolerance),
        ]
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Survey
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Dogleg (rad) at or below which the ratio factor falls back to 1
    #[serde(default = "default_straight_hole_dogleg")]
    pub straight_hole_dogleg_rad: f64,
}

fn default_straight_hole_dogleg() -> f64 {
    defaults::STRAIGHT_HOLE_DOGLEG_RAD
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            straight_hole_dogleg_rad: default_straight_hole_dogleg(),
        }
    }
}

// ============================================================================
// QA
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaConfig {
    /// Slack on TVD-gained ≤ MD-gained
    #[serde(default = "default_physical_bound_tolerance")]
    pub physical_bound_tolerance: f64,

    /// Relative along-hole vs. station-path gap allowed (0.001 = 0.1%)
    #[serde(default = "default_length_sanity")]
    pub length_sanity_max_relative_error: f64,
}

fn default_physical_bound_tolerance() -> f64 {
    defaults::PHYSICAL_BOUND_TOLERANCE
}
fn default_length_sanity() -> f64 {
    defaults::LENGTH_SANITY_MAX_RELATIVE_ERROR
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            physical_bound_tolerance: default_physical_bound_tolerance(),
            length_sanity_max_relative_error: default_length_sanity(),
        }
    }
}

// ============================================================================
// Solver
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_scan_start")]
    pub scan_start_deg: f64,

    #[serde(default = "default_scan_end")]
    pub scan_end_deg: f64,

    #[serde(default = "default_scan_step")]
    pub scan_step_deg: f64,

    /// Hard cap; the scan stops here even if the window is not exhausted
    #[serde(default = "default_max_scan_iterations")]
    pub max_scan_iterations: usize,

    #[serde(default = "default_fallback_misalignment")]
    pub fallback_max_misalignment_deg: f64,

    #[serde(default = "default_vertical_start_tolerance")]
    pub vertical_start_tolerance_deg: f64,

    #[serde(default = "default_closed_form_tolerance")]
    pub closed_form_tolerance: f64,
}

fn default_scan_start() -> f64 {
    defaults::SCAN_START_DEG
}
fn default_scan_end() -> f64 {
    defaults::SCAN_END_DEG
}
fn default_scan_step() -> f64 {
    defaults::SCAN_STEP_DEG
}
fn default_max_scan_iterations() -> usize {
    defaults::MAX_SCAN_ITERATIONS
}
fn default_fallback_misalignment() -> f64 {
    defaults::FALLBACK_MAX_MISALIGNMENT_DEG
}
fn default_vertical_start_tolerance() -> f64 {
    defaults::VERTICAL_START_TOLERANCE_DEG
}
fn default_closed_form_tolerance() -> f64 {
    defaults::CLOSED_FORM_TOLERANCE
}

impl SolverConfig {
    /// Inclinations in the scan window, before the iteration cap applies.
    pub fn scan_steps(&self) -> usize {
        if self.scan_step_deg <= 0.0 || self.scan_end_deg < self.scan_start_deg {
            return 0;
        }
        // Nudge so 89.9 / 0.1 counts as 899 whole steps, not 898.99..
        ((self.scan_end_deg - self.scan_start_deg) / self.scan_step_deg + 1e-9).floor() as usize + 1
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scan_start_deg: default_scan_start(),
            scan_end_deg: default_scan_end(),
            scan_step_deg: default_scan_step(),
            max_scan_iterations: default_max_scan_iterations(),
            fallback_max_misalignment_deg: default_fallback_misalignment(),
            vertical_start_tolerance_deg: default_vertical_start_tolerance(),
            closed_form_tolerance: default_closed_form_tolerance(),
        }
    }
}
