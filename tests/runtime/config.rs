//! Integration tests for configuration loading

use std::collections::HashMap;

use ashvale_foundation::ErrorKind;
use ashvale_runtime::AshvaleConfig;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn full_document_parses() {
    let config = AshvaleConfig::from_toml(
        r#"
        [store]
        ttl_secs = 600
        max_sessions = 10
        max_events = 20

        [nlu]
        execute_threshold = 0.9
        confirm_threshold = 0.4
        cache_ttl_ms = 1000

        [generation]
        max_attempts = 3

        [logging]
        level = "ashvale=debug"
        json = true
        "#,
    )
    .unwrap();
    assert_eq!(config.store.ttl_ms(), 600_000);
    assert_eq!(config.store.max_sessions, 10);
    assert!((config.nlu.execute_threshold - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.generation.max_attempts, 3);
    assert!(config.logging.json);
}

#[test]
fn missing_sections_take_defaults() {
    let config = AshvaleConfig::from_toml("[store]\nmax_sessions = 3\n").unwrap();
    let defaults = AshvaleConfig::default();
    assert_eq!(config.store.max_sessions, 3);
    assert_eq!(config.store.ttl_secs, defaults.store.ttl_secs);
    assert_eq!(config.nlu, defaults.nlu);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn inverted_thresholds_are_rejected() {
    let err = AshvaleConfig::from_toml("[nlu]\nexecute_threshold = 0.3\nconfirm_threshold = 0.6\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(err.is_configuration_fault());
}

#[test]
fn environment_overrides_file_values() {
    let config = AshvaleConfig::default()
        .with_env(env(&[
            ("SESSION_TTL_MS", "90500"),
            ("SESSION_MAX", "7"),
            ("NLU_EXECUTE_THRESHOLD", "0.75"),
        ]))
        .unwrap();
    assert_eq!(config.store.ttl_secs, 91);
    assert_eq!(config.store.max_sessions, 7);
    assert!((config.nlu.execute_threshold - 0.75).abs() < f64::EPSILON);
}

#[test]
fn unparsable_environment_is_an_error() {
    let err = AshvaleConfig::default()
        .with_env(env(&[("SESSION_MAX", "lots")]))
        .unwrap_err();
    assert!(err.to_string().contains("SESSION_MAX"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AshvaleConfig::from_file("/nonexistent/ashvale.toml").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
