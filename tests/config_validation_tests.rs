//! Config Validation Tests
//!
//! Typo detection, range validation and file round trips for
//! `TrajectoryConfig`, exercised independently from the survey engine.

use well_trajectory::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use well_trajectory::config::{ConfigError, TrajectoryConfig};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_qa_tolerance_warns_with_suggestion() {
    let toml_str = r#"
[qa]
length_sanity_max_relative_eror = 0.002
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("length_sanity_max_relative_eror"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("qa.length_sanity_max_relative_error")
    );
}

#[test]
fn misspelt_section_is_flagged() {
    let toml_str = r#"
[solvr]
scan_step_deg = 0.05
"#;
    let warnings = validate_unknown_keys(toml_str);
    // Both the table and its key are unknown under the wrong section name
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("solver"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[survey]
straight_hole_dogleg_rad = 0.0001

[qa]
physical_bound_tolerance = 0.000001
length_sanity_max_relative_error = 0.001

[solver]
scan_start_deg = 0.1
scan_end_deg = 90.0
scan_step_deg = 0.1
max_scan_iterations = 900
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn far_off_key_gets_no_suggestion() {
    let known = known_config_keys();
    assert_eq!(suggest_correction("completely_unrelated", &known), None);
}

#[test]
fn unknown_keys_do_not_fail_the_load() {
    let config = TrajectoryConfig::from_toml_str(
        r#"
[qa]
physical_bound_tolerence = 0.5
"#,
    )
    .unwrap();
    assert_eq!(config, TrajectoryConfig::default());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn default_config_has_no_range_errors() {
    let (errors, warnings) = validate_physical_ranges(&TrajectoryConfig::default());
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.is_empty());
}

#[test]
fn loose_length_sanity_is_rejected() {
    let result = TrajectoryConfig::from_toml_str(
        r#"
[qa]
length_sanity_max_relative_error = 1.5
"#,
    );
    match result {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("length_sanity_max_relative_error")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn zero_scan_iterations_is_rejected() {
    let result = TrajectoryConfig::from_toml_str(
        r#"
[solver]
max_scan_iterations = 0
"#,
    );
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn scan_iterations_above_hard_limit_are_rejected() {
    let result = TrajectoryConfig::from_toml_str(
        r#"
[solver]
scan_step_deg = 0.0001
max_scan_iterations = 1000000
"#,
    );
    match result {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("max_scan_iterations")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn fine_scan_step_only_warns_when_capped() {
    let mut config = TrajectoryConfig::default();
    config.solver.scan_step_deg = 0.05;
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.iter().any(|w| w.field == "solver.max_scan_iterations"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = TrajectoryConfig::from_toml_str("[qa\nphysical_bound_tolerance = ");
    assert!(matches!(result, Err(ConfigError::Parse(..))));
}

// ============================================================================
// File Round Trip
// ============================================================================

#[test]
fn save_and_reload_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trajectory_config.toml");

    let mut config = TrajectoryConfig::default();
    config.qa.length_sanity_max_relative_error = 0.002;
    config.solver.scan_step_deg = 0.05;
    config.solver.max_scan_iterations = 600;

    config.save_to_file(&path).unwrap();
    let reloaded = TrajectoryConfig::load_from_file(&path).unwrap();

    assert_eq!(reloaded, config);
    assert_eq!(reloaded.solver.scan_steps(), 1799);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TrajectoryConfig::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(..))));
}
