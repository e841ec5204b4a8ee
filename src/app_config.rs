use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Write the aligned `.elrc` file automatically when the session
    /// completes
    #[serde(default = "default_autosave_on_complete")]
    pub autosave_on_complete: bool,

    /// How far before a word's start mark playback seeks when jumping to
    /// it, in milliseconds
    #[serde(default = "default_preroll_ms")]
    pub preroll_ms: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_autosave_on_complete() -> bool {
    true
}

fn default_preroll_ms() -> u64 {
    2_000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            autosave_on_complete: default_autosave_on_complete(),
            preroll_ms: default_preroll_ms(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        // An hour of pre-roll means a typo in the config file
        if self.preroll_ms > 3_600_000 {
            return Err(anyhow!(
                "preroll_ms is unreasonably large: {}",
                self.preroll_ms
            ));
        }
        Ok(())
    }
}
