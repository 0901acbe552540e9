use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::trace_channels::TraceChannels;
use crate::internal::severity::Severity;

// Version information from build script - using option_env! for safety
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");

    format!(
        "vacme-log version {}\n\
         Built: {} ({})\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, rustc_semver, cargo_target_triple
    )
}

/// The record every channel consults before emitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub min_severity: Severity,
    #[serde(default)]
    pub trace_channels: TraceChannels,
}

impl LogConfig {
    pub fn new(min_severity: Severity, trace_channels: TraceChannels) -> Self {
        Self {
            min_severity,
            trace_channels,
        }
    }
}

/// Live handle to a [`LogConfig`]. Clones share the same record, so an update
/// through any clone is seen by every channel on its next call.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig(Arc<RwLock<LogConfig>>);

impl SharedConfig {
    pub fn new(config: LogConfig) -> Self {
        Self(Arc::new(RwLock::new(config)))
    }

    // A panic while holding the lock leaves a plain value behind, so poisoning
    // is ignored.
    pub fn read(&self) -> RwLockReadGuard<'_, LogConfig> {
        self.0.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, LogConfig> {
        self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> LogConfig {
        self.read().clone()
    }

    pub fn replace(&self, config: LogConfig) {
        *self.write() = config;
    }

    /// True if both handles point at the same record.
    pub fn ptr_eq(&self, other: &SharedConfig) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<LogConfig> for SharedConfig {
    fn from(config: LogConfig) -> Self {
        Self::new(config)
    }
}

/// OutputFormat selects how the terminal sink renders a line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[serde(rename = "pretty")]
    #[default]
    Pretty,
    #[serde(rename = "json")]
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Message(format!("unknown output format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub min_severity: Severity,
    #[serde(default)]
    pub trace_channels: TraceChannels,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub timestamps: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::default(),
            trace_channels: TraceChannels::default(),
            color: true,
            format: OutputFormat::default(),
            timestamps: false,
        }
    }
}

impl ConsoleConfig {
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.min_severity, self.trace_channels.clone())
    }
}

/// Settings for the crate's own diagnostics (not channel output).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: true,
            output_path: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load defaults, the standard config file locations, an optional explicit
    /// file and `VACME_LOG_*` environment variables, later sources winning.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config_builder = Config::builder()
            // Start with default values
            .set_default("console.min_severity", "info")?
            .set_default("console.color", true)?
            .set_default("console.format", "pretty")?
            .set_default("console.timestamps", false)?
            .set_default("logging.level", "warn")?
            .set_default("logging.color", true)?
            // Load config files in order of precedence
            .add_source(File::with_name("vacme-log").required(false))
            .add_source(File::with_name("/etc/vacme-log/config").required(false));

        if let Some(path) = config_file {
            config_builder = config_builder.add_source(File::from(path).required(true));
        }

        let config = config_builder
            // Environment variables, e.g. VACME_LOG_CONSOLE__MIN_SEVERITY=warn
            .add_source(
                Environment::with_prefix("VACME_LOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.min_severity, Severity::Info);
        assert!(config.trace_channels.is_empty());
    }

    #[test]
    fn test_shared_config_clones_share_state() {
        let shared = SharedConfig::default();
        let other = shared.clone();
        other.write().min_severity = Severity::Error;

        assert_eq!(shared.read().min_severity, Severity::Error);
        assert!(shared.ptr_eq(&other));
        assert!(!shared.ptr_eq(&SharedConfig::default()));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedConfig::default();
        let snapshot = shared.snapshot();
        shared.replace(LogConfig::new(Severity::Trace, TraceChannels::all()));

        assert_eq!(snapshot.min_severity, Severity::Info);
        assert_eq!(shared.read().min_severity, Severity::Trace);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_console_config_to_log_config() {
        let console = ConsoleConfig {
            min_severity: Severity::Warn,
            trace_channels: TraceChannels::parse("A,B"),
            ..Default::default()
        };
        let log_config = console.log_config();
        assert_eq!(log_config.min_severity, Severity::Warn);
        assert!(log_config.trace_channels.covers("B"));
    }
}
