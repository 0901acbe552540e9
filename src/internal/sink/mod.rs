pub mod memory;
pub mod terminal;
pub mod tracing_sink;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::internal::color::ChannelStyle;
use crate::internal::severity::Severity;

pub use memory::{Captured, MemorySink};
pub use terminal::TerminalSink;
pub use tracing_sink::TracingSink;

/// A formatted line handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogLine {
    pub channel: String,
    pub style: ChannelStyle,
    pub severity: Severity,
    pub message: String,
    /// Extra arguments, already rendered, in call order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl LogLine {
    /// Style directive for the channel prefix.
    pub fn directive(&self) -> String {
        self.style.directive()
    }

    /// Plain rendering: `channel [LABEL] message arg1 arg2`.
    pub fn text(&self) -> String {
        let mut text = format!("{} [{}] {}", self.channel, self.severity.label(), self.message);
        for arg in &self.args {
            text.push(' ');
            text.push_str(arg);
        }
        text
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Console function a line is dispatched to. TRACE shares the debug function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Debug,
    Info,
    Warn,
    Error,
}

impl Tier {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Trace | Severity::Debug => Tier::Debug,
            Severity::Info => Tier::Info,
            Severity::Warn => Tier::Warn,
            Severity::Error => Tier::Error,
        }
    }
}

/// Platform console abstraction. Implementations must not panic on write
/// failures; a sink that cannot write reports `is_available() == false`.
pub trait ConsoleSink: Send + Sync {
    fn debug(&self, line: &LogLine);
    fn info(&self, line: &LogLine);
    fn warn(&self, line: &LogLine);
    fn error(&self, line: &LogLine);

    /// Checked before every dispatch.
    fn is_available(&self) -> bool {
        true
    }
}

/// Route `line` to the sink function matching its severity.
pub fn dispatch(sink: &dyn ConsoleSink, line: &LogLine) {
    match Tier::for_severity(line.severity) {
        Tier::Debug => sink.debug(line),
        Tier::Info => sink.info(line),
        Tier::Warn => sink.warn(line),
        Tier::Error => sink.error(line),
    }
}
