//! Diagnostic message sink

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Level of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Row-level diagnostics, hidden unless verbose output is requested
    Info,
    /// Suspicious but non-fatal conditions
    Warning,
    /// User-visible threshold alerts
    Alert,
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Receives diagnostics and alerts emitted while a file is processed.
///
/// The engine never writes to the console itself; callers inject a sink and
/// decide how (and whether) each level is rendered.
pub trait DiagnosticSink {
    fn info(&self, text: &str);
    fn warning(&self, text: &str);
    fn alert(&self, text: &str);
}

/// Sink that buffers messages in memory.
///
/// Safe to share across threads, so each input file can collect its own
/// contiguous message stream even when files are processed in parallel.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<Message>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: Level, text: &str) {
        self.messages.lock().unwrap().push(Message {
            level,
            text: text.to_string(),
        });
    }

    /// Consume the sink and return the buffered messages in emission order
    pub fn into_messages(self) -> Vec<Message> {
        self.messages.into_inner().unwrap()
    }

    /// Snapshot of the buffered messages
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, text: &str) {
        self.push(Level::Info, text);
    }

    fn warning(&self, text: &str) {
        self.push(Level::Warning, text);
    }

    fn alert(&self, text: &str) {
        self.push(Level::Alert, text);
    }
}
