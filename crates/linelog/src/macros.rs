//! crates/linelog/src/macros.rs
//! Threshold-gated logging macros.
//!
//! Each macro converts its arguments with [`LogValue::from`](crate::LogValue)
//! and forwards them to [`Logger::log`](crate::Logger::log). The arguments are
//! only evaluated when the level passes the logger's threshold.

/// Log `values` at an explicit level.
///
/// # Example
/// ```
/// use linelog::{log_at, Logger, Severity, HEX};
/// use linelog_sink::MemorySink;
///
/// let sink = MemorySink::new();
/// let records = sink.records();
/// let mut logger = Logger::new(sink, Severity::Debug)?;
/// log_at!(logger, Severity::Normal, "flags ", HEX, 6u8);
/// assert!(records.lines()[0].ends_with("NORMAL flags 0x06\n"));
/// # Ok::<(), linelog::LogError>(())
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        let logger = $logger.by_mut();
        let level: $crate::Severity = $level;
        if logger.is_enabled(level) {
            logger.log(level, &[$($crate::LogValue::from($value)),*]);
        }
    }};
}

/// Log at [`Severity::Critical`](crate::Severity::Critical).
///
/// # Example
/// ```ignore
/// critical_log!(logger, "cannot continue: ", code);
/// ```
#[macro_export]
macro_rules! critical_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Critical $(, $value)*)
    };
}

/// Log at [`Severity::Error`](crate::Severity::Error).
///
/// # Example
/// ```ignore
/// error_log!(logger, "write failed after ", attempts, " attempts");
/// ```
#[macro_export]
macro_rules! error_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Error $(, $value)*)
    };
}

/// Log at [`Severity::Normal`](crate::Severity::Normal).
#[macro_export]
macro_rules! normal_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Normal $(, $value)*)
    };
}

/// Log at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Info $(, $value)*)
    };
}

/// Log at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! verbose_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Verbose $(, $value)*)
    };
}

/// Log at [`Severity::Debug`](crate::Severity::Debug).
///
/// # Example
/// ```ignore
/// debug_log!(logger, "state ", HEX, flags);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Debug $(, $value)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::{HEX, Logger, Severity};
    use linelog_sink::MemorySink;
    use std::cell::Cell;

    #[test]
    fn level_macros_map_to_their_severity() {
        let sink = MemorySink::new();
        let records = sink.records();
        let mut logger = Logger::new(sink, Severity::Debug).unwrap();
        critical_log!(logger, "c");
        error_log!(logger, "e");
        normal_log!(logger, "n");
        info_log!(logger, "i");
        verbose_log!(logger, "v");
        debug_log!(logger, "d",);
        let tokens: Vec<String> = records
            .lines()
            .iter()
            .map(|line| line[20..].trim_end().to_owned())
            .collect();
        assert_eq!(
            tokens,
            vec!["CRITICAL c", "ERROR e", "NORMAL n", "INFO i", "VERBOSE v", "DEBUG d"]
        );
    }

    #[test]
    fn filtered_macro_skips_argument_evaluation() {
        let mut logger = Logger::new(MemorySink::new(), Severity::Normal).unwrap();
        let evaluated = Cell::new(0);
        let count = || {
            evaluated.set(evaluated.get() + 1);
            1u8
        };
        debug_log!(logger, count());
        assert_eq!(evaluated.get(), 0);
        normal_log!(logger, count());
        assert_eq!(evaluated.get(), 1);
    }

    #[test]
    fn macros_accept_a_logger_reference() {
        fn emit(logger: &mut Logger<MemorySink>) {
            info_log!(logger, "value ", HEX, 255u8);
        }
        let sink = MemorySink::new();
        let records = sink.records();
        let mut logger = Logger::new(sink, Severity::Info).unwrap();
        emit(&mut logger);
        assert!(records.lines()[0].ends_with("INFO value 0xff\n"));
    }

    #[test]
    fn logger_expression_is_evaluated_once() {
        let sink = MemorySink::new();
        let records = sink.records();
        let mut logger = Logger::new(sink, Severity::Info).unwrap();
        let lookups = Cell::new(0);
        info_log!(
            {
                lookups.set(lookups.get() + 1);
                &mut logger
            },
            "once"
        );
        assert_eq!(lookups.get(), 1);
        debug_log!(
            {
                lookups.set(lookups.get() + 1);
                &mut logger
            },
            "filtered"
        );
        assert_eq!(lookups.get(), 2);
        assert_eq!(records.lines().len(), 1);
    }

    #[test]
    fn macro_without_values_logs_level_only() {
        let sink = MemorySink::new();
        let records = sink.records();
        let mut logger = Logger::new(sink, Severity::Info).unwrap();
        info_log!(logger);
        assert!(records.lines()[0].ends_with(" INFO \n"));
    }
}
