use std::fmt;

use linelog_sink::Sink;

use crate::buffer::MessageBuffer;
use crate::error::LogError;
use crate::format::FormatMode;
use crate::level::Severity;
use crate::timestamp::{self, Clock};
use crate::value::LogValue;

mod constructors;
mod message;

pub use constructors::LoggerBuilder;
pub use message::Message;

/// Default number of values [`Logger::log`] renders before truncating.
pub const MAX_LOG_VALUES: usize = 51;

/// Literal appended when a value list exceeds the configured limit.
pub const TRUNCATED_SUFFIX: &str = " (truncated)";

/// Builds single-line messages and commits them to an owned [`Sink`].
///
/// Each line has the shape `<YYYY-MM-DD HH:MM:SS> <LEVEL> <values…>\n`. The
/// logger owns one fixed-size buffer that is reused for every message, so a
/// line longer than the buffer is truncated rather than reallocated.
///
/// Messages below the threshold are skipped before any formatting happens.
/// Write failures are never reported to the caller; they are counted and can
/// be inspected through [`dropped_writes`](Self::dropped_writes).
///
/// The sink is released exactly once: by [`release`](Self::release), which
/// reports a failed close, or when the logger is dropped, which discards it.
/// [`into_sink`](Self::into_sink) hands the sink back unreleased.
///
/// # Examples
///
/// ```
/// use linelog::{Logger, Severity, HEX};
/// use linelog_sink::MemorySink;
///
/// let sink = MemorySink::new();
/// let records = sink.records();
/// let mut logger = Logger::new(sink, Severity::Info)?;
///
/// logger.log(Severity::Info, &["status ".into(), HEX, 10u8.into()]);
/// logger.log(Severity::Debug, &["filtered".into()]);
///
/// let lines = records.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(" INFO status 0x0a\n"));
/// # Ok::<(), linelog::LogError>(())
/// ```
pub struct Logger<S: Sink> {
    // `None` only while a consuming method is taking the sink out.
    sink: Option<S>,
    threshold: Severity,
    level: Severity,
    format: FormatMode,
    buffer: MessageBuffer,
    clock: Clock,
    value_limit: Option<usize>,
    dropped_writes: u64,
}

impl<S> Logger<S>
where
    S: Sink,
{
    /// Messages at this level or more critical are emitted.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Reports whether a message at `level` would be emitted.
    #[must_use]
    pub const fn is_enabled(&self, level: Severity) -> bool {
        level.passes(self.threshold)
    }

    /// Capacity of the message buffer, terminator included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Maximum number of values rendered by [`log`](Self::log), if capped.
    #[must_use]
    pub const fn value_limit(&self) -> Option<usize> {
        self.value_limit
    }

    /// Number of committed lines the sink failed to write.
    #[must_use]
    pub const fn dropped_writes(&self) -> u64 {
        self.dropped_writes
    }

    /// Borrows the owned sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        match &self.sink {
            Some(sink) => sink,
            None => unreachable!(),
        }
    }

    /// Mutably borrows the owned sink.
    #[must_use]
    pub fn sink_mut(&mut self) -> &mut S {
        match &mut self.sink {
            Some(sink) => sink,
            None => unreachable!(),
        }
    }

    #[doc(hidden)]
    pub fn by_mut(&mut self) -> &mut Self {
        self
    }

    /// Begins a message at `level` and returns the guard used to build it.
    ///
    /// The buffer is zeroed, the format mode returns to
    /// [`FormatMode::Default`] and the timestamp prefix is written, so the
    /// returned message always starts exactly [`timestamp::TIMESTAMP_LEN`]
    /// bytes long no matter what an earlier, uncommitted message left behind.
    ///
    /// `start` does not consult the threshold; callers that build messages
    /// by hand check [`is_enabled`](Self::is_enabled) first.
    pub fn start(&mut self, level: Severity) -> Message<'_, S> {
        self.buffer.clear();
        self.format = FormatMode::Default;
        self.level = level;
        timestamp::write_timestamp(&mut self.buffer, (self.clock)());
        Message::new(self)
    }

    /// Emits one line made of the level token followed by `values`.
    ///
    /// Nothing happens when `level` is filtered out. Values are rendered left
    /// to right; when more values than [`value_limit`](Self::value_limit) are
    /// supplied, the surplus is dropped and [`TRUNCATED_SUFFIX`] is appended
    /// in decimal mode.
    pub fn log(&mut self, level: Severity, values: &[LogValue<'_>]) {
        if !self.is_enabled(level) {
            return;
        }
        let mut message = self.start(level);
        message.append_level(level);
        message.append_values(values);
        message.commit();
    }

    /// Emits one line whose values are appended by `build`.
    ///
    /// `build` only runs when `level` passes the threshold, so expensive
    /// arguments can be computed inside it. The level token has already been
    /// written when `build` receives the message.
    pub fn log_with<F>(&mut self, level: Severity, build: F)
    where
        F: FnOnce(&mut Message<'_, S>),
    {
        if !self.is_enabled(level) {
            return;
        }
        let mut message = self.start(level);
        message.append_level(level);
        build(&mut message);
        message.commit();
    }

    /// Releases the owned sink and consumes the logger.
    ///
    /// # Errors
    ///
    /// [`LogError::Release`] when the sink fails to close.
    pub fn release(mut self) -> Result<(), LogError> {
        match self.sink.take() {
            Some(sink) => sink.release().map_err(LogError::Release),
            None => Ok(()),
        }
    }

    /// Consumes the logger and hands the sink back without releasing it.
    #[must_use]
    pub fn into_sink(mut self) -> S {
        match self.sink.take() {
            Some(sink) => sink,
            None => unreachable!(),
        }
    }
}

impl<S> Drop for Logger<S>
where
    S: Sink,
{
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            let _ = sink.release();
        }
    }
}

impl<S> fmt::Debug for Logger<S>
where
    S: Sink + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink)
            .field("threshold", &self.threshold)
            .field("capacity", &self.buffer.capacity())
            .field("value_limit", &self.value_limit)
            .field("dropped_writes", &self.dropped_writes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MAX_LOG_MESSAGE_SIZE;
    use crate::value::{DEFAULT, HEX};
    use linelog_sink::MemorySink;
    use time::OffsetDateTime;
    use time::macros::datetime;

    fn fixed_clock() -> OffsetDateTime {
        datetime!(2023-06-01 12:34:56 UTC)
    }

    const STAMP: &str = "2023-06-01 12:34:56 ";

    fn logger(threshold: Severity) -> (Logger<MemorySink>, linelog_sink::MemoryRecords) {
        let sink = MemorySink::new();
        let records = sink.records();
        let logger = Logger::builder(sink)
            .threshold(threshold)
            .clock(fixed_clock)
            .build()
            .expect("logger");
        (logger, records)
    }

    #[test]
    fn log_renders_level_and_values() {
        let (mut log, records) = logger(Severity::Info);
        log.log(Severity::Info, &["started".into(), 7u8.into()]);
        assert_eq!(records.lines(), vec![format!("{STAMP}INFO started7\n")]);
    }

    #[test]
    fn filtered_message_writes_nothing() {
        let (mut log, records) = logger(Severity::Normal);
        log.log(Severity::Verbose, &["hidden".into()]);
        assert_eq!(records.write_count(), 0);
        log.log(Severity::Error, &["shown".into()]);
        assert_eq!(records.write_count(), 1);
    }

    #[test]
    fn log_with_skips_closure_when_filtered() {
        let (mut log, records) = logger(Severity::Error);
        let mut ran = false;
        log.log_with(Severity::Debug, |_| ran = true);
        assert!(!ran);
        log.log_with(Severity::Critical, |message| {
            message.append_str("boom");
        });
        assert_eq!(records.lines(), vec![format!("{STAMP}CRITICAL boom\n")]);
    }

    #[test]
    fn hex_persists_until_default_marker() {
        let (mut log, records) = logger(Severity::Debug);
        log.log(
            Severity::Debug,
            &[HEX, 10u8.into(), " ".into(), 255u16.into(), DEFAULT, " ".into(), 10u8.into()],
        );
        assert_eq!(
            records.lines(),
            vec![format!("{STAMP}DEBUG 0x0a 0x00ff 10\n")]
        );
    }

    #[test]
    fn format_resets_between_messages() {
        let (mut log, records) = logger(Severity::Debug);
        log.log(Severity::Info, &[HEX, 1u8.into()]);
        log.log(Severity::Info, &[10u8.into()]);
        let lines = records.lines();
        assert!(lines[0].ends_with("INFO 0x01\n"));
        assert!(lines[1].ends_with("INFO 10\n"));
    }

    #[test]
    fn value_limit_appends_truncated_suffix() {
        let (mut log, records) = logger(Severity::Debug);
        let mut values = vec![HEX];
        values.extend(std::iter::repeat_n(LogValue::from("x"), MAX_LOG_VALUES));
        log.log(Severity::Info, &values);

        let line = &records.lines()[0];
        let expected_xs = "x".repeat(MAX_LOG_VALUES - 1);
        assert_eq!(
            line,
            &format!("{STAMP}INFO {expected_xs}{TRUNCATED_SUFFIX}\n")
        );
    }

    #[test]
    fn value_limit_of_exactly_max_is_not_truncated() {
        let (mut log, records) = logger(Severity::Debug);
        let values = vec![LogValue::from("y"); MAX_LOG_VALUES];
        log.log(Severity::Info, &values);
        let line = &records.lines()[0];
        assert!(!line.contains(TRUNCATED_SUFFIX));
        assert_eq!(line.matches('y').count(), MAX_LOG_VALUES);
    }

    #[test]
    fn release_releases_sink_once() {
        let (log, records) = logger(Severity::Debug);
        log.release().expect("release");
        assert_eq!(records.release_count(), 1);
    }

    #[test]
    fn drop_releases_sink_once() {
        let (mut log, records) = logger(Severity::Debug);
        log.log(Severity::Info, &["bye".into()]);
        assert_eq!(records.release_count(), 0);
        drop(log);
        assert_eq!(records.release_count(), 1);
        assert_eq!(records.write_count(), 1);
    }

    #[test]
    fn drop_ignores_release_failure() {
        let sink = MemorySink::new().failing_release();
        let records = sink.records();
        drop(Logger::new(sink, Severity::Debug).expect("logger"));
        assert_eq!(records.release_count(), 1);
    }

    #[test]
    fn into_sink_returns_unreleased_sink() {
        let (log, records) = logger(Severity::Debug);
        let sink = log.into_sink();
        assert_eq!(records.release_count(), 0);
        drop(sink);
        assert_eq!(records.release_count(), 0);
    }

    #[test]
    fn release_failure_is_reported() {
        let sink = MemorySink::new().failing_release();
        let log = Logger::new(sink, Severity::Debug).expect("logger");
        assert!(matches!(log.release(), Err(LogError::Release(_))));
    }

    #[test]
    fn write_failures_are_counted_not_raised() {
        let sink = MemorySink::new().failing_writes();
        let mut log = Logger::new(sink, Severity::Debug).expect("logger");
        log.log(Severity::Info, &["a".into()]);
        log.log(Severity::Info, &["b".into()]);
        assert_eq!(log.dropped_writes(), 2);
    }

    #[test]
    fn debug_output_omits_buffer_contents() {
        let (log, _records) = logger(Severity::Normal);
        let rendered = format!("{log:?}");
        assert!(rendered.contains("threshold: Normal"));
        assert!(rendered.contains("capacity: 4096"));
    }

    #[test]
    fn default_capacity_is_four_kib() {
        let (log, _records) = logger(Severity::Normal);
        assert_eq!(log.capacity(), MAX_LOG_MESSAGE_SIZE);
        assert_eq!(log.value_limit(), Some(MAX_LOG_VALUES));
    }
}
