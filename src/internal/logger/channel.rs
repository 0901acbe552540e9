// src/internal/logger/channel.rs

use chrono::Utc;
use std::fmt::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::internal::color::{color_for, ChannelStyle};
use crate::internal::config::SharedConfig;
use crate::internal::severity::{is_enabled, Severity};
use crate::internal::sink::{dispatch, ConsoleSink, LogLine};

/// Placeholder for a value whose formatting impl reported an error.
pub const UNFORMATTABLE: &str = "<unformattable>";

/// Extra argument rendered through `Display`, so strings appear unquoted.
///
/// ```
/// use vacme_log::Bare;
/// # let channel = vacme_log::Logger::detached().create_channel("Docs");
/// channel.info_with("loaded", &[&Bare("rows"), &3]);
/// ```
#[derive(Clone, Copy)]
pub struct Bare<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Bare<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Named, colored emitter bound to a live [`SharedConfig`].
///
/// The name and colors are fixed at creation. The enablement decision reads
/// the shared configuration on every call, so reconfiguring the owning
/// `Logger` takes effect without recreating the channel.
///
/// Emission never fails and never panics into the caller.
#[derive(Clone)]
pub struct ChannelEmitter {
    name: Arc<str>,
    style: ChannelStyle,
    config: SharedConfig,
    sink: Option<Arc<dyn ConsoleSink>>,
}

impl ChannelEmitter {
    pub(crate) fn new(
        name: &str,
        config: SharedConfig,
        sink: Option<Arc<dyn ConsoleSink>>,
    ) -> Self {
        Self {
            name: Arc::from(name),
            style: color_for(name),
            config,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> ChannelStyle {
        self.style
    }

    /// Whether a message at `severity` would be forwarded right now.
    pub fn enabled(&self, severity: Severity) -> bool {
        let config = self.config.read();
        config.trace_channels.covers(&self.name) || is_enabled(severity, config.min_severity)
    }

    /// Emit `message` followed by `args` at `severity`.
    ///
    /// Nothing is formatted unless the channel is enabled for `severity`.
    /// `args` are rendered with `Debug`, so `&"rows"` appears as `"rows"`;
    /// wrap a value in [`Bare`] to render it with `Display` instead. An
    /// argument that fails to format becomes [`UNFORMATTABLE`]. One that
    /// panics drops the line, but the process panic hook still prints its
    /// report to stderr.
    pub fn emit(&self, severity: Severity, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        if !self.enabled(severity) {
            return;
        }
        let Some(sink) = self.sink.as_deref() else {
            return;
        };

        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            if !sink.is_available() {
                return;
            }
            let line = self.format_line(severity, &message, args);
            dispatch(sink, &line);
        }));
    }

    fn format_line(
        &self,
        severity: Severity,
        message: &dyn fmt::Display,
        args: &[&dyn fmt::Debug],
    ) -> LogLine {
        let mut rendered = String::new();
        let message = match write!(rendered, "{}", message) {
            Ok(()) => rendered,
            Err(_) => UNFORMATTABLE.to_string(),
        };

        LogLine {
            channel: self.name.to_string(),
            style: self.style,
            severity,
            message,
            args: args.iter().map(|arg| render_arg(*arg)).collect(),
            timestamp: Utc::now(),
        }
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(Severity::Trace, message, &[]);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, message, &[]);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, message, &[]);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Severity::Warn, message, &[]);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, message, &[]);
    }

    pub fn trace_with(&self, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        self.emit(Severity::Trace, message, args);
    }

    pub fn debug_with(&self, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        self.emit(Severity::Debug, message, args);
    }

    pub fn info_with(&self, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        self.emit(Severity::Info, message, args);
    }

    pub fn warn_with(&self, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        self.emit(Severity::Warn, message, args);
    }

    pub fn error_with(&self, message: impl fmt::Display, args: &[&dyn fmt::Debug]) {
        self.emit(Severity::Error, message, args);
    }
}

impl fmt::Debug for ChannelEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelEmitter")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("attached", &self.sink.is_some())
            .finish()
    }
}

fn render_arg(arg: &dyn fmt::Debug) -> String {
    let mut out = String::new();
    match write!(out, "{:?}", arg) {
        Ok(()) => out,
        Err(_) => UNFORMATTABLE.to_string(),
    }
}
