pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::color::{color_for, is_dark, ChannelStyle, Rgb};
pub use internal::config::{LogConfig, SharedConfig, TraceChannels};
pub use internal::logger::{Bare, ChannelEmitter, Logger};
pub use internal::severity::{is_enabled, Severity, SeverityInput};
pub use internal::sink::{ConsoleSink, LogLine, MemorySink, TerminalSink, TracingSink};
