//! Config validation: unknown-key detection with Levenshtein suggestions
//! and numeric range checks.
//!
//! The raw TOML is first walked as a `toml::Value` tree so misspelt keys,
//! which serde would silently ignore, produce a warning with a "did you
//! mean?" hint. Range checks then run on the deserialized config.

use std::collections::HashSet;

use super::defaults;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `TrajectoryConfig`.
///
/// Kept by hand in step with trajectory_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        "survey",
        "survey.straight_hole_dogleg_rad",
        "qa",
        "qa.physical_bound_tolerance",
        "qa.length_sanity_max_relative_error",
        "solver",
        "solver.scan_start_deg",
        "solver.scan_end_deg",
        "solver.scan_step_deg",
        "solver.max_scan_iterations",
        "solver.fallback_max_misalignment_deg",
        "solver.vertical_start_tolerance_deg",
        "solver.closed_form_tolerance",
    ]
    .into_iter()
    .collect()
}

/// Collect the dotted path of every key in a TOML tree, tables included.
///
/// `{ a = { b = 1 } }` yields `["a", "a.b"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    for (k, v) in table {
        let path = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        if v.is_table() {
            keys.push(path.clone());
            keys.extend(walk_toml_keys(v, &path));
        } else {
            keys.push(path);
        }
    }
    keys
}

// ============================================================================
// Suggestions
// ============================================================================

/// Edit distance between two keys (insert, delete, substitute).
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Closest known key within edit distance 3, ties broken alphabetically.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

/// Warn about every key in `raw_toml` that `TrajectoryConfig` does not know.
///
/// Never fails; syntax errors are left for the serde pass to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            message: format!("Unknown config key '{key}'"),
            suggestion: suggest_correction(&key, &known),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Check value ranges on a parsed config.
///
/// Returns (errors, warnings). Errors are values the engine cannot work
/// with; warnings are legal but unusual.
pub fn validate_physical_ranges(
    config: &super::TrajectoryConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let dogleg = config.survey.straight_hole_dogleg_rad;
    if dogleg <= 0.0 || dogleg > 0.1 {
        errors.push(format!(
            "survey.straight_hole_dogleg_rad = {dogleg} is outside (0, 0.1] rad"
        ));
    } else if dogleg > 1e-2 {
        warnings.push(ValidationWarning {
            field: "survey.straight_hole_dogleg_rad".to_string(),
            message: format!(
                "straight_hole_dogleg_rad = {dogleg} treats doglegs up to {:.2}° as straight hole",
                dogleg.to_degrees()
            ),
            suggestion: None,
        });
    }

    let qa = &config.qa;
    if qa.physical_bound_tolerance < 0.0 {
        errors.push(format!(
            "qa.physical_bound_tolerance = {} cannot be negative",
            qa.physical_bound_tolerance
        ));
    }
    if qa.length_sanity_max_relative_error <= 0.0 || qa.length_sanity_max_relative_error >= 1.0 {
        errors.push(format!(
            "qa.length_sanity_max_relative_error = {} is outside (0, 1)",
            qa.length_sanity_max_relative_error
        ));
    } else if qa.length_sanity_max_relative_error > 0.01 {
        warnings.push(ValidationWarning {
            field: "qa.length_sanity_max_relative_error".to_string(),
            message: format!(
                "length_sanity_max_relative_error = {} accepts more than 1% path mismatch",
                qa.length_sanity_max_relative_error
            ),
            suggestion: None,
        });
    }

    let s = &config.solver;
    if s.scan_start_deg < 0.0 || s.scan_end_deg > 90.0 {
        errors.push(format!(
            "solver scan window [{}, {}]° must lie within 0-90°",
            s.scan_start_deg, s.scan_end_deg
        ));
    }
    if s.max_scan_iterations > defaults::MAX_SCAN_ITERATIONS {
        errors.push(format!(
            "solver.max_scan_iterations = {} exceeds the hard limit of {}",
            s.max_scan_iterations,
            defaults::MAX_SCAN_ITERATIONS
        ));
    }
    if s.scan_step_deg <= 0.0 {
        errors.push(format!(
            "solver.scan_step_deg = {} must be > 0",
            s.scan_step_deg
        ));
    } else if s.scan_end_deg > s.scan_start_deg {
        let needed = s.scan_steps();
        if needed > s.max_scan_iterations {
            warnings.push(ValidationWarning {
                field: "solver.max_scan_iterations".to_string(),
                message: format!(
                    "scan window needs {needed} steps but max_scan_iterations = {}; scan will stop early",
                    s.max_scan_iterations
                ),
                suggestion: None,
            });
        }
    }
    if s.fallback_max_misalignment_deg <= 0.0 {
        errors.push(format!(
            "solver.fallback_max_misalignment_deg = {} must be > 0",
            s.fallback_max_misalignment_deg
        ));
    }
    if s.vertical_start_tolerance_deg < 0.0 {
        errors.push(format!(
            "solver.vertical_start_tolerance_deg = {} cannot be negative",
            s.vertical_start_tolerance_deg
        ));
    }
    if s.closed_form_tolerance <= 0.0 {
        errors.push(format!(
            "solver.closed_form_tolerance = {} must be > 0",
            s.closed_form_tolerance
        ));
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
