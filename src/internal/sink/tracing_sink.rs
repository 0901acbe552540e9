use tracing::{debug, error, info, warn};

use super::{ConsoleSink, LogLine};

/// Forwards lines to `tracing` events for hosts that already run a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for TracingSink {
    fn debug(&self, line: &LogLine) {
        debug!(target: "vacme_log::console", channel = %line.channel, "{}", line.text());
    }

    fn info(&self, line: &LogLine) {
        info!(target: "vacme_log::console", channel = %line.channel, "{}", line.text());
    }

    fn warn(&self, line: &LogLine) {
        warn!(target: "vacme_log::console", channel = %line.channel, "{}", line.text());
    }

    fn error(&self, line: &LogLine) {
        error!(target: "vacme_log::console", channel = %line.channel, "{}", line.text());
    }
}
