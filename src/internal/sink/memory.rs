use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{ConsoleSink, LogLine, Tier};

/// A line together with the console function it was sent to.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub tier: Tier,
    pub line: LogLine,
}

/// In-memory sink - captures every dispatched line. Clones share the buffer.
#[derive(Clone)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Captured>>>,
    available: Arc<AtomicBool>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulate a missing console: while unavailable nothing is captured.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Get all captured entries
    pub fn entries(&self) -> Vec<Captured> {
        self.lock().clone()
    }

    /// Captured lines rendered with [`LogLine::text`]
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|c| c.line.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Captured>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn capture(&self, tier: Tier, line: &LogLine) {
        self.lock().push(Captured {
            tier,
            line: line.clone(),
        });
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for MemorySink {
    fn debug(&self, line: &LogLine) {
        self.capture(Tier::Debug, line);
    }

    fn info(&self, line: &LogLine) {
        self.capture(Tier::Info, line);
    }

    fn warn(&self, line: &LogLine) {
        self.capture(Tier::Warn, line);
    }

    fn error(&self, line: &LogLine) {
        self.capture(Tier::Error, line);
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
