use crate::logger::LogChannel;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Error,
}

impl Severity {
    /// Tag embedded in every composed line.
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Debug => "▶️ DEBUG",
            Severity::Error => "🟥 ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Receives composed lines. Implementations must tolerate concurrent calls.
pub trait LogSink: Send + Sync {
    fn emit(&self, channel: &LogChannel, severity: Severity, text: &str);
}
