use audio_streaming_log::logger::*;
use audio_streaming_log::{log_debug, log_error};
use clap::Parser;

#[derive(Parser, Debug)]
struct DemoCli {
    /// Category to log into, e.g. `networking` or `audio.rendering`
    #[arg(long, default_value = "generic")]
    category: Category,
    #[arg(long, default_value = "hello from %@")]
    message: String,
}

fn main() -> anyhow::Result<()> {
    let cli = DemoCli::parse();
    let logger = Logger::new_bootstrap();
    log_debug!(cli.category, "bootstrap filter hides this debug line");

    let config = LogConfig {
        filter: "debug".to_string(),
        enabled: true,
    };
    logger.reload_from_config(&config)?;
    log_debug!(cli.category, &cli.message, "logger_demo");
    log_error!(cli.category, "%d frames dropped", 3);

    // Explicit call site, as a caller without macros would pass it.
    debug("tick", Category::Networking, &[], CallSite::new("/x/Net.swift", "poll()", 42));

    set_enabled(false);
    log_error!(Category::AudioRendering, "not shown while disabled");

    set_enabled(true);
    for category in Category::ALL {
        log_debug!(category, "channel %@ is live", category.channel_name());
    }

    // Lines can also be captured instead of handed to tracing.
    let captured = CategorizedLogger::new(FakeSink::new());
    captured.debug("value=%@", Category::Generic, &["5".into()], audio_streaming_log::call_site!());
    for line in captured.sink().lines() {
        info!(channel = line.channel, "captured: {}", line.text);
    }

    Ok(())
}
