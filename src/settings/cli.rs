use super::{Parser, Settings};
use crate::logger::LogConfig;

#[derive(Parser, Debug)]
pub struct Cli {
    /// Settings file, defaults to `settings/dev.toml` (`settings/release.toml` in release builds)
    #[arg(long)]
    pub settings: Option<String>,
    /// Overrides `log.filter`
    #[arg(long)]
    pub log_filter: Option<String>,
    /// Turns categorized logging off regardless of `log.enabled`
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_config(&self, settings: &Settings) -> LogConfig {
        LogConfig {
            filter: self
                .log_filter
                .clone()
                .unwrap_or_else(|| settings.log.filter.clone()),
            enabled: settings.log.enabled && !self.quiet,
        }
    }
}
