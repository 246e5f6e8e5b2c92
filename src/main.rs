use audio_streaming_log::logger::*;
use audio_streaming_log::settings::*;
use audio_streaming_log::{log_debug, log_error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = cli.log_config(&project_settings);
    logger.reload_from_config(&logger_config)?;

    for category in Category::ALL {
        log_debug!(category, "channel %@ bound to subsystem %@", category.channel_name(), SUBSYSTEM);
    }
    if !is_enabled() {
        info!("categorized logging is disabled by settings");
    }
    log_error!(Category::Generic, "startup finished with %d error(s)", 0);

    Ok(())
}
