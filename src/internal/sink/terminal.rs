// src/internal/sink/terminal.rs

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use super::{ConsoleSink, LogLine};
use crate::internal::color::Rgb;
use crate::internal::config::{ConsoleConfig, OutputFormat};

/// Writes lines to the process terminal: debug/info to stdout, warn/error to
/// stderr. Write failures (closed pipe, detached terminal) are dropped.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    color: bool,
    format: OutputFormat,
    timestamps: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            color: true,
            format: OutputFormat::Pretty,
            timestamps: false,
        }
    }

    pub fn from_config(cfg: &ConsoleConfig) -> Self {
        Self {
            color: cfg.color,
            format: cfg.format,
            timestamps: cfg.timestamps,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Render `line` the way it would be written, without the newline.
    pub fn render(&self, line: &LogLine) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(line).unwrap_or_else(|_| line.text()),
            OutputFormat::Pretty => self.render_pretty(line),
        }
    }

    fn render_pretty(&self, line: &LogLine) -> String {
        let mut out = String::new();
        if self.timestamps {
            out.push_str(&line.timestamp.to_rfc3339());
            out.push(' ');
        }

        if self.color {
            let prefix = format!(" {} ", line.channel)
                .with(to_color(line.style.foreground))
                .on(to_color(line.style.background));
            out.push_str(&prefix.to_string());
        } else {
            out.push_str(&line.channel);
        }

        out.push_str(&format!(" [{}] {}", line.severity.label(), line.message));
        for arg in &line.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }

    fn write_stdout(&self, line: &LogLine) {
        let rendered = self.render(line);
        let _ = writeln!(io::stdout().lock(), "{}", rendered);
    }

    fn write_stderr(&self, line: &LogLine) {
        let rendered = self.render(line);
        let _ = writeln!(io::stderr().lock(), "{}", rendered);
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel color as a crossterm 24-bit color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl ConsoleSink for TerminalSink {
    fn debug(&self, line: &LogLine) {
        self.write_stdout(line);
    }

    fn info(&self, line: &LogLine) {
        self.write_stdout(line);
    }

    fn warn(&self, line: &LogLine) {
        self.write_stderr(line);
    }

    fn error(&self, line: &LogLine) {
        self.write_stderr(line);
    }
}
