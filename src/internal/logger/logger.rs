// src/internal/logger/logger.rs

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::channel::ChannelEmitter;
use crate::internal::config::{LogConfig, SharedConfig, TraceChannels};
use crate::internal::severity::{Severity, SeverityInput};
use crate::internal::sink::ConsoleSink;

/// Owns a logging configuration and the sink every channel writes to.
///
/// Channels created from a logger share its configuration by reference, so
/// [`configure`](Logger::configure) and the setters apply to channels created
/// earlier as well. Independent loggers never share state unless built from
/// the same [`SharedConfig`].
#[derive(Clone)]
pub struct Logger {
    config: SharedConfig,
    sink: Option<Arc<dyn ConsoleSink>>,
}

impl Logger {
    /// Logger with the default configuration (INFO, no trace channels).
    pub fn new<S: ConsoleSink + 'static>(sink: S) -> Self {
        Self::with_config(SharedConfig::default(), sink)
    }

    pub fn with_config<S: ConsoleSink + 'static>(config: SharedConfig, sink: S) -> Self {
        Self::with_shared_sink(config, Arc::new(sink))
    }

    pub fn with_shared_sink(config: SharedConfig, sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            config,
            sink: Some(sink),
        }
    }

    /// Logger without a console: every channel is a no-op.
    pub fn detached() -> Self {
        Self {
            config: SharedConfig::default(),
            sink: None,
        }
    }

    /// Set the minimum severity and the trace-enabled channels in one step.
    /// A raw severity that is not recognized becomes DEBUG.
    pub fn configure(
        &self,
        min_severity: impl Into<SeverityInput>,
        trace_channels: impl Into<TraceChannels>,
    ) {
        let config = LogConfig::new(min_severity.into().resolve(), trace_channels.into());
        debug!(
            "Configuring logger: min_severity={}, trace_channels={:?}",
            config.min_severity,
            config.trace_channels.iter().collect::<Vec<_>>()
        );
        self.config.replace(config);
    }

    pub fn set_min_severity(&self, min_severity: impl Into<SeverityInput>) {
        self.config.write().min_severity = min_severity.into().resolve();
    }

    pub fn set_trace_channels(&self, trace_channels: impl Into<TraceChannels>) {
        self.config.write().trace_channels = trace_channels.into();
    }

    pub fn min_severity(&self) -> Severity {
        self.config.read().min_severity
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> LogConfig {
        self.config.snapshot()
    }

    pub fn shared_config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Create a named channel; its colors are derived from `name`.
    pub fn create_channel(&self, name: &str) -> ChannelEmitter {
        ChannelEmitter::new(name, self.config.clone(), self.sink.clone())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config.snapshot())
            .field("attached", &self.sink.is_some())
            .finish()
    }
}
