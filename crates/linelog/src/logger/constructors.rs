use linelog_sink::Sink;
#[cfg(unix)]
use linelog_sink::DescriptorSink;

use super::{Logger, MAX_LOG_VALUES};
use crate::buffer::{MAX_LOG_MESSAGE_SIZE, MessageBuffer};
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::format::FormatMode;
use crate::level::Severity;
use crate::timestamp::{self, Clock};

/// Configures a [`Logger`] before its buffer is allocated.
///
/// The builder owns the sink. If [`build`](Self::build) fails the sink is
/// released before the error is returned, so a failed construction never
/// leaks it.
#[must_use = "a builder does nothing until `build` is called"]
pub struct LoggerBuilder<S> {
    sink: S,
    threshold: Severity,
    capacity: usize,
    value_limit: Option<usize>,
    clock: Clock,
}

impl<S> LoggerBuilder<S> {
    fn new(sink: S) -> Self {
        Self {
            sink,
            threshold: Severity::MOST_VERBOSE,
            capacity: MAX_LOG_MESSAGE_SIZE,
            value_limit: Some(MAX_LOG_VALUES),
            clock: timestamp::local_now,
        }
    }

    /// Least critical level that is still emitted.
    pub const fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Size of the message buffer in bytes, terminator included.
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Maximum number of values [`Logger::log`] renders; `None` disables the cap.
    pub const fn value_limit(mut self, limit: Option<usize>) -> Self {
        self.value_limit = limit;
        self
    }

    /// Source of the timestamp written at the start of each message.
    pub const fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl<S> LoggerBuilder<S>
where
    S: Sink,
{
    /// Allocates the buffer and produces the logger.
    ///
    /// # Errors
    ///
    /// [`LogError::InvalidParameter`] for a zero capacity and
    /// [`LogError::ResourceExhausted`] when the buffer cannot be allocated.
    /// In both cases the sink is released first; a failure to release it is
    /// reported as [`LogError::Release`] instead.
    pub fn build(self) -> Result<Logger<S>, LogError> {
        let buffer = match MessageBuffer::with_capacity(self.capacity) {
            Ok(buffer) => buffer,
            Err(error) => {
                self.sink.release().map_err(LogError::Release)?;
                return Err(error);
            }
        };
        Ok(Logger {
            sink: Some(self.sink),
            threshold: self.threshold,
            level: self.threshold,
            format: FormatMode::Default,
            buffer,
            clock: self.clock,
            value_limit: self.value_limit,
            dropped_writes: 0,
        })
    }
}

impl<S> Logger<S>
where
    S: Sink,
{
    /// Starts configuring a logger that writes to `sink`.
    pub fn builder(sink: S) -> LoggerBuilder<S> {
        LoggerBuilder::new(sink)
    }

    /// Creates a logger with the default buffer size and value limit.
    ///
    /// # Errors
    ///
    /// See [`LoggerBuilder::build`].
    pub fn new(sink: S, threshold: Severity) -> Result<Self, LogError> {
        Self::builder(sink).threshold(threshold).build()
    }

    /// Creates a logger from a [`LoggerConfig`].
    ///
    /// # Errors
    ///
    /// See [`LoggerBuilder::build`].
    pub fn from_config(sink: S, config: &LoggerConfig) -> Result<Self, LogError> {
        Self::builder(sink)
            .threshold(config.threshold)
            .capacity(config.capacity)
            .value_limit(config.value_limit)
            .build()
    }
}

#[cfg(unix)]
impl Logger<DescriptorSink> {
    /// Creates a logger writing to a duplicate of the process's standard output.
    ///
    /// Releasing the logger closes only the duplicate.
    ///
    /// # Errors
    ///
    /// [`LogError::SinkUnavailable`] when standard output cannot be
    /// duplicated, otherwise see [`LoggerBuilder::build`].
    pub fn stdout(threshold: Severity) -> Result<Self, LogError> {
        let sink = DescriptorSink::stdout()?;
        Self::new(sink, threshold)
    }
}
