// src/internal/severity/severity.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Severity of a log message, from most to least verbose.
///
/// Comparisons go through [`Severity::position`], i.e. the index in
/// [`Severity::ALL`], never through discriminant values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Returned by [`Severity::from_str`] when the input names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}' (expected trace, debug, info, warn or error)")]
pub struct ParseSeverityError(pub String);

impl Severity {
    /// Canonical order used by every enablement decision.
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Severity substituted when a raw configuration value is not recognized.
    pub const FALLBACK: Severity = Severity::Debug;

    /// Index of this severity in [`Severity::ALL`].
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0)
    }

    /// Upper-case label rendered in front of every message.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Lower-case name, used for configuration files and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Validate a raw value, falling back to [`Severity::FALLBACK`] when it is
    /// not one of the known names.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse() {
            Ok(severity) => severity,
            Err(e) => {
                warn!("{}, using {}", e, Self::FALLBACK.as_str());
                Self::FALLBACK
            }
        }
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unknown names deserialize to the fallback severity.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::from_raw(&raw))
    }
}

/// Minimum severity as handed to `Logger::configure`: either already typed or
/// a raw value still to be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeverityInput {
    Typed(Severity),
    Raw(String),
}

impl SeverityInput {
    pub fn resolve(&self) -> Severity {
        match self {
            SeverityInput::Typed(severity) => *severity,
            SeverityInput::Raw(raw) => Severity::from_raw(raw),
        }
    }
}

impl From<Severity> for SeverityInput {
    fn from(severity: Severity) -> Self {
        SeverityInput::Typed(severity)
    }
}

impl From<&str> for SeverityInput {
    fn from(raw: &str) -> Self {
        SeverityInput::Raw(raw.to_string())
    }
}

impl From<String> for SeverityInput {
    fn from(raw: String) -> Self {
        SeverityInput::Raw(raw)
    }
}

/// True iff `severity` is at or above `min` in the canonical order.
pub fn is_enabled(severity: Severity, min: Severity) -> bool {
    severity.position() >= min.position()
}

/// Same as [`is_enabled`] for a minimum that has not been validated yet.
pub fn is_enabled_raw(severity: Severity, raw_min: &str) -> bool {
    is_enabled(severity, Severity::from_raw(raw_min))
}
