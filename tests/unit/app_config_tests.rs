/*!
 * Tests for application configuration functionality
 */

use subtitler::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.history_limit, 100);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // A zero history limit is rejected
    config.history_limit = 0;
    assert!(config.validate().is_err());

    config.history_limit = 1;
    assert!(config.validate().is_ok());
}

/// Test JSON round-tripping of the configuration
#[test]
fn test_config_serde_withRoundTrip_shouldPreserveValues() {
    let config = Config {
        log_level: LogLevel::Debug,
        history_limit: 25,
    };

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.log_level, LogLevel::Debug);
    assert_eq!(parsed.history_limit, 25);
}

/// Test that missing fields fall back to defaults when deserializing
#[test]
fn test_config_serde_withEmptyObject_shouldUseDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(parsed.log_level, LogLevel::Info);
    assert_eq!(parsed.history_limit, 100);
}

/// Test the lowercase serde representation of log levels
#[test]
fn test_log_level_serde_withLowercaseNames_shouldDeserialize() {
    let parsed: Config = serde_json::from_str(r#"{"log_level": "trace"}"#).unwrap();

    assert_eq!(parsed.log_level, LogLevel::Trace);
}
