/// Logs a debug line through the global logger from the current call site.
///
/// ```ignore
/// log_debug!(Category::Networking, "connected to %@ in %d ms", host, elapsed);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($category:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger::debug(
            $message,
            $category,
            &[$($crate::logger::LogArg::from($arg)),*],
            $crate::call_site!(),
        )
    };
}

/// Logs an error line through the global logger from the current call site.
#[macro_export]
macro_rules! log_error {
    ($category:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger::error(
            $message,
            $category,
            &[$($crate::logger::LogArg::from($arg)),*],
            $crate::call_site!(),
        )
    };
}
