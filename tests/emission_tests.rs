mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use fixtures::{memory_logger, Counted, Panicky};
use vacme_log::internal::sink::Tier;
use vacme_log::{channel_debug, channel_info, Bare, Severity, TraceChannels};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== filtering ====================

    #[test]
    fn test_error_minimum_suppresses_lower_severities() {
        let (logger, sink) = memory_logger();
        logger.configure(Severity::Error, TraceChannels::new());
        let channel = logger.create_channel("AppointmentService");

        channel.debug("d");
        channel.info("i");
        channel.warn("w");
        assert!(sink.is_empty());

        channel.error("e");
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tier, Tier::Error);
        assert_eq!(entries[0].line.message, "e");
    }

    #[test]
    fn test_explicit_trace_channel_bypasses_minimum() {
        let (logger, sink) = memory_logger();
        logger.configure(Severity::Error, TraceChannels::from(["PersonSearch"]));

        logger.create_channel("PersonSearch").trace("query built");
        logger.create_channel("Impfkontrolle").trace("hidden");

        assert_eq!(sink.texts(), vec!["PersonSearch [TRACE] query built"]);
    }

    #[test]
    fn test_wildcard_enables_every_channel() {
        let (logger, sink) = memory_logger();
        logger.configure(Severity::Error, "*");

        logger.create_channel("A").trace("one");
        logger.create_channel("B").debug("two");

        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_invalid_raw_minimum_means_debug() {
        let (logger, sink) = memory_logger();
        logger.configure("not-a-level", "");
        let channel = logger.create_channel("Bootstrap");

        channel.trace("dropped");
        channel.debug("kept");

        assert_eq!(logger.min_severity(), Severity::Debug);
        assert_eq!(sink.texts(), vec!["Bootstrap [DEBUG] kept"]);
    }

    // ==================== live configuration ====================

    #[test]
    fn test_reconfiguration_applies_to_existing_channel() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Zertifikat");

        logger.set_min_severity(Severity::Error);
        channel.warn("first");
        logger.set_min_severity(Severity::Warn);
        channel.warn("second");

        assert_eq!(sink.texts(), vec!["Zertifikat [WARN] second"]);
    }

    #[test]
    fn test_trace_set_change_applies_to_existing_channel() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Registration");

        channel.trace("before");
        logger.set_trace_channels("Registration");
        channel.trace("after");

        assert_eq!(sink.texts(), vec!["Registration [TRACE] after"]);
    }

    // ==================== dispatch ====================

    #[test]
    fn test_tiers_per_severity() {
        let (logger, sink) = memory_logger();
        logger.configure(Severity::Trace, "");
        let channel = logger.create_channel("Tiers");

        channel.trace("t");
        channel.debug("d");
        channel.info("i");
        channel.warn("w");
        channel.error("e");

        let tiers: Vec<Tier> = sink.entries().iter().map(|c| c.tier).collect();
        assert_eq!(
            tiers,
            vec![Tier::Debug, Tier::Debug, Tier::Info, Tier::Warn, Tier::Error]
        );
    }

    #[test]
    fn test_line_carries_style_and_args() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("AppComponent");

        channel.info_with("loaded", &[&3, &"rows", &Some(1.5), &Bare("bare")]);

        let line = &sink.entries()[0].line;
        assert_eq!(line.channel, "AppComponent");
        assert_eq!(line.style.background.to_hex(), "#1C4BEB");
        assert_eq!(line.severity.label(), "INFO");
        assert_eq!(line.args, vec!["3", "\"rows\"", "Some(1.5)", "bare"]);
        assert!(line.directive().contains("background: #1C4BEB"));
    }

    #[test]
    fn test_unavailable_sink_is_a_silent_no_op() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Offline");

        sink.set_available(false);
        channel.error("lost");
        sink.set_available(true);
        channel.error("kept");

        assert_eq!(sink.texts(), vec!["Offline [ERROR] kept"]);
    }

    #[test]
    fn test_panicking_argument_does_not_escape() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Fragile");

        channel.error_with("boom", &[&Panicky]);
        channel.error("still working");

        assert_eq!(sink.texts(), vec!["Fragile [ERROR] still working"]);
    }

    #[test]
    fn test_panicking_argument_on_disabled_severity_is_never_formatted() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Fragile");

        channel.debug_with("skipped", &[&Panicky]);

        assert!(sink.is_empty());
    }

    // ==================== lazy formatting ====================

    #[test]
    fn test_disabled_emit_skips_formatting() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Lazy");
        let calls = AtomicUsize::new(0);

        channel.debug(Counted(&calls));
        channel.trace_with("hidden", &[&Bare(Counted(&calls))]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(sink.is_empty());

        channel.info(Counted(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sink.texts(), vec!["Lazy [INFO] counted"]);
    }

    // ==================== macros ====================

    #[test]
    fn test_macros_format_only_when_enabled() {
        let (logger, sink) = memory_logger();
        let channel = logger.create_channel("Lazy");
        let calls = AtomicUsize::new(0);

        channel_debug!(channel, "{}", Counted(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        channel_info!(channel, "{} #{}", Counted(&calls), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sink.texts(), vec!["Lazy [INFO] counted #7"]);
    }
}
