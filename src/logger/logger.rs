use crate::logger::{CategorizedLogger, LogSink};
use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub enabled: bool,
}

impl LogConfig {
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| anyhow!(e))
    }

    pub fn apply_to<S: LogSink>(&self, logger: &CategorizedLogger<S>) {
        logger.set_enabled(self.enabled);
    }
}

/// Owns the installed subscriber's filter so it can be swapped after settings load.
pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Logger {
    pub fn new_bootstrap() -> Self {
        let filter = EnvFilter::new("info");
        let (filter, reload_handle) = reload::Layer::new(filter);

        // Composed lines already carry a timestamp.
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().without_time())
            .init();

        Self { reload_handle }
    }

    /// Swaps the subscriber filter and switches the global categorized logger.
    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        let filter = config.env_filter()?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        config.apply_to(super::global());
        Ok(())
    }
}
