/*!
 * Tests for application configuration functionality
 */

use lyralign::app_config::{Config, LogLevel};

/// Test defaults match the documented behavior
#[test]
fn test_default_withNoOverrides_shouldUseDocumentedValues() {
    let config = Config::default();
    assert!(config.autosave_on_complete);
    assert_eq!(config.preroll_ms, 2_000);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test a full JSON round trip preserves every field
#[test]
fn test_serde_withFullConfig_shouldRoundTrip() {
    let config = Config {
        autosave_on_complete: false,
        preroll_ms: 500,
        log_level: LogLevel::Debug,
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert!(!parsed.autosave_on_complete);
    assert_eq!(parsed.preroll_ms, 500);
    assert_eq!(parsed.log_level, LogLevel::Debug);
}

/// Test missing fields fall back to defaults
#[test]
fn test_serde_withEmptyObject_shouldApplyDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();
    assert!(parsed.autosave_on_complete);
    assert_eq!(parsed.preroll_ms, 2_000);
    assert_eq!(parsed.log_level, LogLevel::Info);
}

/// Test log levels deserialize from lowercase names
#[test]
fn test_serde_withLowercaseLevel_shouldParse() {
    let parsed: Config = serde_json::from_str(r#"{"log_level": "trace"}"#).unwrap();
    assert_eq!(parsed.log_level, LogLevel::Trace);
}

/// Test validation rejects an absurd pre-roll
#[test]
fn test_validate_withHugePreroll_shouldFail() {
    let config = Config {
        preroll_ms: 4_000_000,
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test validation accepts the defaults
#[test]
fn test_validate_withDefaults_shouldPass() {
    assert!(Config::default().validate().is_ok());
}
