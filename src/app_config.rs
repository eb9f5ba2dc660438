use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::language_utils::{LanguageOverride, ProfileTable, DEFAULT_MAX_LINE_LENGTH, LOGOGRAPHIC_MAX_LINE_LENGTH};
use crate::line_split::ProtectedTerms;
use crate::retiming::BoundaryPolicy;
use crate::validation::TimingValidatorConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Line budget for languages wrapped on whitespace
    #[serde(default = "default_max_line_length")]
    pub default_max_line_length: u32,

    /// Line budget for CJK-family languages
    #[serde(default = "default_logographic_max_line_length")]
    pub logographic_max_line_length: u32,

    /// Per-language budget overrides
    #[serde(default)]
    pub language_overrides: Vec<LanguageOverride>,

    /// Terms never broken across lines, first match wins
    #[serde(default = "default_protected_terms")]
    pub protected_terms: Vec<String>,

    /// How the remainder of an integer time split is handled
    #[serde(default)]
    pub boundary_policy: BoundaryPolicy,

    /// Appended to the file stem of re-split outputs
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Files processed at the same time in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Thresholds for post-split reporting
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Thresholds used when reporting on re-split cues
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Shortest comfortable display time
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: u64,

    /// Longest display time for one cue
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: u64,

    /// Reading speed limit in characters per second
    #[serde(default = "default_max_cps")]
    pub max_cps: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: default_min_duration_ms(),
            max_duration_ms: default_max_duration_ms(),
            max_cps: default_max_cps(),
        }
    }
}

impl From<&ValidationConfig> for TimingValidatorConfig {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            max_cps: config.max_cps,
            min_duration_ms: config.min_duration_ms,
            max_duration_ms: config.max_duration_ms,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_max_line_length() -> u32 {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_logographic_max_line_length() -> u32 {
    LOGOGRAPHIC_MAX_LINE_LENGTH
}

fn default_protected_terms() -> Vec<String> {
    vec!["Photoroom".to_string(), "AI".to_string()]
}

fn default_output_suffix() -> String {
    "_split".to_string()
}

fn default_concurrent_files() -> usize {
    4
}

fn default_min_duration_ms() -> u64 {
    500
}

fn default_max_duration_ms() -> u64 {
    30_000
}

fn default_max_cps() -> f64 {
    25.0
}

impl Config {
    /// Load a configuration file, or write and return the defaults if missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config: Config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.default_max_line_length == 0 || self.logographic_max_line_length == 0 {
            return Err(anyhow!("Line budgets must be greater than zero"));
        }

        if let Some(over) = self.language_overrides.iter().find(|o| o.max_line_length == 0) {
            return Err(anyhow!("Line budget override for '{}' must be greater than zero", over.code));
        }

        if self.protected_terms.iter().any(|t| t.trim().is_empty()) {
            return Err(anyhow!("Protected terms must not be empty"));
        }

        if self.output_suffix.trim().is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if self.concurrent_files == 0 {
            return Err(anyhow!("concurrent_files must be at least 1"));
        }

        if self.validation.min_duration_ms > self.validation.max_duration_ms {
            return Err(anyhow!(
                "validation.min_duration_ms ({}) exceeds validation.max_duration_ms ({})",
                self.validation.min_duration_ms,
                self.validation.max_duration_ms
            ));
        }

        Ok(())
    }

    /// Language profile table built from the configured budgets
    pub fn profile_table(&self) -> ProfileTable {
        ProfileTable::new(
            self.default_max_line_length,
            self.logographic_max_line_length,
            self.language_overrides.clone(),
        )
    }

    /// Protected terms in configured order
    pub fn protected_terms(&self) -> ProtectedTerms {
        ProtectedTerms::new(self.protected_terms.iter().cloned())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_max_line_length: default_max_line_length(),
            logographic_max_line_length: default_logographic_max_line_length(),
            language_overrides: Vec::new(),
            protected_terms: default_protected_terms(),
            boundary_policy: BoundaryPolicy::default(),
            output_suffix: default_output_suffix(),
            concurrent_files: default_concurrent_files(),
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
