use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the service configuration including loading,
/// validating and saving configuration settings.
/// Represents the service configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Translation defaults
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Defaults applied to translation requests and surfaced to clients
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationSettings {
    /// Model preselected by the client shell
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Domain used when a request names none
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// Language pair preselected by the client shell
    #[serde(default = "default_language_pair")]
    pub default_language_pair: String,

    /// Whether the client shell enables post-editing by default
    #[serde(default = "default_use_post_editing")]
    pub use_post_editing_default: bool,

    /// Cap on generated tokens per provider call
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model() -> String {
    "claude-3-sonnet".to_string()
}

fn default_domain() -> String {
    "general".to_string()
}

fn default_language_pair() -> String {
    "en-fr".to_string()
}

fn default_use_post_editing() -> bool {
    true
}

fn default_max_output_tokens() -> u32 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            default_domain: default_domain(),
            default_language_pair: default_language_pair(),
            use_post_editing_default: default_use_post_editing(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Log level for the service
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open config file {:?}", path.as_ref()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration from a file, creating a default config file when
    /// none exists yet.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Self::default();
            config.save(path.as_ref())?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write config file {:?}", path.as_ref()))?;
        Ok(())
    }
}
