//! crates/linelog/src/tracing_bridge.rs
//! Renders `tracing` events through a [`Logger`].
//!
//! [`LineLogLayer`] is a `tracing-subscriber` layer that maps each event's
//! level onto a [`Severity`] and writes the event's `message` field as one
//! line. Other fields and span context are not rendered.
//!
//! # Usage
//!
//! ```rust,ignore
//! use linelog::{Logger, Severity, init_tracing};
//!
//! let logger = Logger::stdout(Severity::Info)?;
//! init_tracing(logger);
//!
//! tracing::info!("listening");
//! tracing::debug!("filtered by the logger threshold");
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use linelog_sink::Sink;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::Severity;
use crate::logger::Logger;

/// A tracing layer that writes events through an owned [`Logger`].
///
/// The logger sits behind a mutex; events from concurrent threads are
/// serialized and each becomes one complete line.
pub struct LineLogLayer<S: Sink> {
    logger: Mutex<Logger<S>>,
}

impl<S: Sink> LineLogLayer<S> {
    /// Wraps `logger`. Its threshold decides which events are written.
    #[must_use]
    pub const fn new(logger: Logger<S>) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Recovers the logger, for example to release its sink.
    #[must_use]
    pub fn into_logger(self) -> Logger<S> {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Maps a tracing level onto a severity.
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Normal,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Verbose,
            Level::TRACE => Severity::Debug,
        }
    }
}

impl<S, R> Layer<R> for LineLogLayer<S>
where
    S: Sink + Send + 'static,
    R: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, R>) {
        let severity = Self::severity_for(event.metadata().level());
        let mut logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        if !logger.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            logger.log_with(severity, |line| {
                line.append_str(&message);
            });
        }
    }
}

impl<S> fmt::Debug for LineLogLayer<S>
where
    S: Sink + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogLayer")
            .field("logger", &self.logger)
            .finish()
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that renders events through `logger`.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing<S>(logger: Logger<S>)
where
    S: Sink + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LineLogLayer::new(logger))
        .init();
}

/// Like [`init_tracing`], but reports an already-installed subscriber as an error.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already set.
pub fn try_init_tracing<S>(logger: Logger<S>) -> Result<(), TryInitError>
where
    S: Sink + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LineLogLayer::new(logger))
        .try_init()
}
