// Formatting macros for channels. The message is only formatted when the
// channel is enabled for the severity.

#[macro_export]
macro_rules! channel_log {
    ($channel:expr, $severity:expr, $($arg:tt)+) => {{
        let channel = &$channel;
        let severity = $severity;
        if channel.enabled(severity) {
            channel.emit(severity, format_args!($($arg)+), &[]);
        }
    }};
}

#[macro_export]
macro_rules! channel_trace {
    ($channel:expr, $($arg:tt)+) => {
        $crate::channel_log!($channel, $crate::internal::severity::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! channel_debug {
    ($channel:expr, $($arg:tt)+) => {
        $crate::channel_log!($channel, $crate::internal::severity::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! channel_info {
    ($channel:expr, $($arg:tt)+) => {
        $crate::channel_log!($channel, $crate::internal::severity::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! channel_warn {
    ($channel:expr, $($arg:tt)+) => {
        $crate::channel_log!($channel, $crate::internal::severity::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! channel_error {
    ($channel:expr, $($arg:tt)+) => {
        $crate::channel_log!($channel, $crate::internal::severity::Severity::Error, $($arg)+)
    };
}
