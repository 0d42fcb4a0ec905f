/*!
 * Tests for configuration loading and defaults
 */

use babelgate::app_config::{Config, LogLevel};

#[test]
fn test_defaultConfig_shouldMatchShippedDefaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.translation.default_model, "claude-3-sonnet");
    assert_eq!(config.translation.default_domain, "general");
    assert_eq!(config.translation.default_language_pair, "en-fr");
    assert_eq!(config.translation.max_output_tokens, 4000);
}

#[test]
fn test_configRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.server.port = 3000;
    config.log_level = LogLevel::Trace;
    config.translation.default_model = "gpt-4".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.server.port, 3000);
    assert_eq!(parsed.log_level, LogLevel::Trace);
    assert_eq!(parsed.translation.default_model, "gpt-4");
}

#[test]
fn test_configFromFile_missingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}

#[test]
fn test_configDeserialize_emptyObject_shouldUseAllDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.log_level, LogLevel::Info);
}
