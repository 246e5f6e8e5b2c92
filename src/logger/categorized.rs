use crate::logger::{
    CallSite, Category, LogArg, LogChannel, LogSink, Severity, TracingSink, format_template,
};
use chrono::{Local, NaiveTime};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Routes formatted lines to one channel per category.
pub struct CategorizedLogger<S: LogSink = TracingSink> {
    channels: [LogChannel; 3],
    enabled: AtomicBool,
    sink: S,
}

impl<S: LogSink> CategorizedLogger<S> {
    pub fn new(sink: S) -> Self {
        Self {
            channels: Category::ALL.map(LogChannel::new),
            enabled: AtomicBool::new(true),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn channel(&self, category: Category) -> &LogChannel {
        &self.channels[category.index()]
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn debug(&self, message: &str, category: Category, args: &[LogArg], site: CallSite<'_>) {
        self.log(message, category, Severity::Debug, args, site);
    }

    pub fn error(&self, message: &str, category: Category, args: &[LogArg], site: CallSite<'_>) {
        self.log(message, category, Severity::Error, args, site);
    }

    fn log(
        &self,
        message: &str,
        category: Category,
        severity: Severity,
        args: &[LogArg],
        site: CallSite<'_>,
    ) {
        if !self.is_enabled() {
            return;
        }
        let message = format_template(message, args);
        let line = compose_line(Local::now().time(), severity, site, &message);
        self.sink.emit(self.channel(category), severity, &line);
    }
}

impl Default for CategorizedLogger<TracingSink> {
    fn default() -> Self {
        Self::new(TracingSink::new())
    }
}

/// `HH:mm:ss.SSS`
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format("%H:%M:%S%.3f").to_string()
}

pub fn compose_line(time: NaiveTime, severity: Severity, site: CallSite<'_>, message: &str) -> String {
    format!(
        "{} {} {} - {}",
        format_timestamp(time),
        severity.marker(),
        site.label(),
        message
    )
}

static GLOBAL: LazyLock<CategorizedLogger> = LazyLock::new(CategorizedLogger::default);

/// The process-wide logger, backed by [`TracingSink`].
pub fn global() -> &'static CategorizedLogger {
    &GLOBAL
}

pub fn is_enabled() -> bool {
    global().is_enabled()
}

pub fn set_enabled(enabled: bool) {
    global().set_enabled(enabled);
}

pub fn debug(message: &str, category: Category, args: &[LogArg], site: CallSite<'_>) {
    global().debug(message, category, args, site);
}

pub fn error(message: &str, category: Category, args: &[LogArg], site: CallSite<'_>) {
    global().error(message, category, args, site);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::FakeSink;
    use std::sync::Arc;
    use std::thread;

    fn net_site() -> CallSite<'static> {
        CallSite::new("/x/Net.swift", "poll()", 42)
    }

    fn is_timestamp(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 12
            && b.iter().enumerate().all(|(i, c)| match i {
                2 | 5 => *c == b':',
                8 => *c == b'.',
                _ => c.is_ascii_digit(),
            })
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        let time = NaiveTime::from_hms_milli_opt(7, 5, 3, 9).unwrap();
        assert_eq!(format_timestamp(time), "07:05:03.009");
        let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        assert_eq!(format_timestamp(time), "23:59:59.999");
        assert!(is_timestamp(&format_timestamp(Local::now().time())));
    }

    #[test]
    fn leap_second_keeps_three_digits() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert!(is_timestamp(&format_timestamp(time)));
    }

    #[test]
    fn compose_line_layout() {
        let time = NaiveTime::from_hms_milli_opt(12, 0, 1, 250).unwrap();
        let site = CallSite::new("/a/b/Widget.swift", "load(id:)", 7);
        assert_eq!(
            compose_line(time, Severity::Error, site, "boom"),
            "12:00:01.250 🟥 ERROR Widget.load():7 - boom"
        );
    }

    #[test]
    fn debug_end_to_end() {
        let logger = CategorizedLogger::new(FakeSink::new());
        logger.debug("tick", Category::Networking, &[], net_site());

        let lines = logger.sink().take();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.channel, "audio.networking");
        assert_eq!(line.severity, Severity::Debug);
        let (timestamp, rest) = line.text.split_at(12);
        assert!(is_timestamp(timestamp), "{}", line.text);
        assert_eq!(rest, " ▶️ DEBUG Net.poll():42 - tick");
    }

    #[test]
    fn error_uses_error_marker_and_formats_args() {
        let logger = CategorizedLogger::new(FakeSink::new());
        logger.error("value=%@", Category::Generic, &["5".into()], net_site());

        let lines = logger.sink().take();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Error);
        assert!(lines[0].text.contains("🟥 ERROR"));
        assert!(lines[0].text.ends_with(" - value=5"));
    }

    #[test]
    fn each_category_routes_to_its_own_channel() {
        let logger = CategorizedLogger::new(FakeSink::new());
        for category in Category::ALL {
            logger.debug("hello", category, &[], net_site());
            let lines = logger.sink().take();
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].category, category);
            assert_eq!(lines[0].channel, category.channel_name());
        }
    }

    #[test]
    fn channels_are_bound_once_per_category() {
        let logger = CategorizedLogger::new(FakeSink::new());
        for category in Category::ALL {
            assert_eq!(logger.channel(category).category(), category);
            assert!(std::ptr::eq(logger.channel(category), logger.channel(category)));
        }
    }

    #[test]
    fn disabled_logger_emits_nothing() {
        let logger = CategorizedLogger::new(FakeSink::new());
        assert!(logger.is_enabled());
        logger.set_enabled(false);
        for category in Category::ALL {
            logger.debug("a %@", category, &["b".into()], net_site());
            logger.error("c", category, &[], net_site());
        }
        assert!(logger.sink().lines().is_empty());

        logger.set_enabled(true);
        logger.error("back", Category::Generic, &[], net_site());
        assert_eq!(logger.sink().lines().len(), 1);
    }

    #[test]
    fn toggle_mid_run() {
        let logger = CategorizedLogger::new(FakeSink::new());
        logger.debug("before", Category::Generic, &[], net_site());
        logger.set_enabled(false);
        logger.debug("after", Category::Generic, &[], net_site());

        let lines = logger.sink().take();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.ends_with("- before"));
    }

    #[test]
    fn concurrent_toggle_never_duplicates() {
        let logger = Arc::new(CategorizedLogger::new(FakeSink::new()));
        let writers: Vec<_> = (0..4)
            .map(|t| {
                let logger = logger.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        logger.debug("%d/%d", Category::AudioRendering, &[t.into(), i.into()], net_site());
                    }
                })
            })
            .collect();
        let toggler = {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..1000 {
                    logger.set_enabled(i % 2 == 0);
                }
            })
        };
        for writer in writers {
            writer.join().unwrap();
        }
        toggler.join().unwrap();

        let mut messages: Vec<_> = logger
            .sink()
            .lines()
            .into_iter()
            .map(|line| line.text.rsplit(" - ").next().unwrap().to_string())
            .collect();
        let total = messages.len();
        assert!(total <= 1000);
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), total);
    }
}
