use audio_streaming_log::logger::*;
use audio_streaming_log::settings::*;
use audio_streaming_log::{log_debug, log_error};

// $ cargo run --bin settings_demo -- --settings=settings/release.toml --quiet
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new_bootstrap();

    if parse_settings(Some("")).is_err() {
        warn!("an empty settings path is rejected");
    }

    let project_settings = parse_settings(cli.settings.as_deref())?;
    let config = cli.log_config(&project_settings);
    info!(?project_settings, filter = %config.filter, enabled = config.enabled, "applying log settings");
    logger.reload_from_config(&config)?;

    log_debug!(Category::Generic, "shown only when log.enabled is set and --quiet is not");
    log_error!(Category::Networking, "errors are gated by the same switch: enabled=%@", is_enabled());

    set_enabled(true);
    log_debug!(Category::Generic, "switch forced back on");

    Ok(())
}
