use crate::logger::{
    AUDIO_RENDERING_CHANNEL, Category, GENERIC_CHANNEL, LogChannel, LogSink, NETWORKING_CHANNEL,
    Severity,
};

/// Forwards lines as `tracing` events targeted at the channel name.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

// Event targets have to be constants, hence one arm per channel.
macro_rules! emit_event {
    ($target:expr, $channel:expr, $severity:expr, $text:expr) => {
        match $severity {
            Severity::Debug => {
                tracing::debug!(target: $target, subsystem = $channel.subsystem(), "{}", $text)
            }
            Severity::Error => {
                tracing::error!(target: $target, subsystem = $channel.subsystem(), "{}", $text)
            }
        }
    };
}

impl LogSink for TracingSink {
    fn emit(&self, channel: &LogChannel, severity: Severity, text: &str) {
        match channel.category() {
            Category::AudioRendering => emit_event!(AUDIO_RENDERING_CHANNEL, channel, severity, text),
            Category::Networking => emit_event!(NETWORKING_CHANNEL, channel, severity, text),
            Category::Generic => emit_event!(GENERIC_CHANNEL, channel, severity, text),
        }
    }
}
