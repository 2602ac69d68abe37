use causeway_core::config::*;
use causeway_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausewayConfig::from_toml("").unwrap();

    assert_eq!(config.sampling.seed, None);
    assert_eq!(config.sampling.effective_max_samples(), 1_000_000);
    assert!(!config.sampling.effective_strict_interventions());

    assert_eq!(config.grading.effective_unwrap_passes(), 3);
    assert_eq!(config.grading.effective_experiment_cost(), 20);
    assert_eq!(config.grading.effective_sample_cost(), 1);
    assert_eq!(config.grading.effective_incorrect_guess_cost(), 70);
    assert!(config.grading.allowed_senders.is_empty());

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[sampling]
seed = 42
strict_interventions = true

[grading]
incorrect_guess_cost = 100
allowed_senders = ["alice@example.com"]
"#;
    let config = CausewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.sampling.seed, Some(42));
    assert!(config.sampling.effective_strict_interventions());
    // Non-overridden fields keep defaults
    assert_eq!(config.sampling.effective_max_samples(), 1_000_000);
    assert_eq!(config.grading.effective_incorrect_guess_cost(), 100);
    assert_eq!(config.grading.effective_experiment_cost(), 20);
}

#[test]
fn allowed_senders_match_ignoring_case_and_whitespace() {
    let config = CausewayConfig::from_toml(
        r#"
[grading]
allowed_senders = ["  Alice@Example.com "]
"#,
    )
    .unwrap();
    assert!(config.grading.is_allowed("alice@example.com"));
    assert!(!config.grading.is_allowed("bob@example.com"));
    assert!(GradingConfig::default().is_allowed("anyone@example.com"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = CausewayConfig::from_toml("[sampling\nseed = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_max_samples_fails_validation() {
    let config = CausewayConfig::from_toml("[sampling]\nmax_samples = 0").unwrap();
    let err = CausewayConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { field: "sampling.max_samples", .. }));
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("causeway.toml"),
        "[grading]\nunwrap_passes = 5\n",
    )
    .unwrap();
    let config = CausewayConfig::load(dir.path()).unwrap();
    assert_eq!(config.grading.effective_unwrap_passes(), 5);
}

#[test]
fn load_reports_unreadable_and_malformed_project_files() {
    let unreadable = tempfile::tempdir().unwrap();
    std::fs::create_dir(unreadable.path().join("causeway.toml")).unwrap();
    let err = CausewayConfig::load(unreadable.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }));

    let malformed = tempfile::tempdir().unwrap();
    std::fs::write(malformed.path().join("causeway.toml"), "[grading\n").unwrap();
    let err = CausewayConfig::load(malformed.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin.ends_with("causeway.toml")));
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CausewayConfig::load(dir.path()).unwrap();
    assert_eq!(config.grading.effective_unwrap_passes(), 3);
}

#[test]
fn config_serde_roundtrip() {
    let mut config = CausewayConfig::default();
    config.sampling.seed = Some(7);
    let toml_str = config.to_toml().unwrap();
    let roundtripped = CausewayConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.sampling.seed, Some(7));
    assert_eq!(
        roundtripped.observability.log_level,
        config.observability.log_level
    );
}
