use crate::logger::{Category, LogChannel, LogSink, Severity};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedLine {
    pub category: Category,
    pub channel: &'static str,
    pub severity: Severity,
    pub text: String,
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct FakeSink {
    lines: Mutex<Vec<EmittedLine>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<EmittedLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn take(&self) -> Vec<EmittedLine> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl LogSink for FakeSink {
    fn emit(&self, channel: &LogChannel, severity: Severity, text: &str) {
        let line = EmittedLine {
            category: channel.category(),
            channel: channel.name(),
            severity,
            text: text.to_string(),
        };
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}
