#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/linelog/src/lib.rs
//!
//! # Overview
//!
//! `linelog` builds single-line, timestamped log messages in a fixed-size
//! buffer and commits each finished line to a [`Sink`](linelog_sink::Sink)
//! with one write. Lines look like:
//!
//! ```text
//! 2024-05-17 08:30:00 INFO connected to 10.0.0.7 port 0x1f90
//! ```
//!
//! # Design
//!
//! - [`Logger`] owns the sink, the threshold and one reusable
//!   [`MessageBuffer`]. Messages less critical than the threshold are dropped
//!   before anything is formatted.
//! - [`Logger::start`] returns a [`Message`] that mutably borrows the logger.
//!   Appends go through it and [`Message::commit`] consumes it, so a message
//!   can neither be committed twice nor interleaved with another.
//! - [`Logger::log`] and the level macros ([`info_log!`], [`debug_log!`], …)
//!   take a list of [`LogValue`]s. The [`HEX`] and [`DEFAULT`] markers switch
//!   how the integers after them are rendered.
//! - [`LoggerConfig`] carries the tunables and reads the threshold from the
//!   `LINELOG_THRESHOLD_LEVEL` environment variable.
//! - With the `tracing` feature, `LineLogLayer` renders `tracing` events
//!   through a logger.
//!
//! # Invariants
//!
//! - A committed line never exceeds the buffer capacity; excess bytes are
//!   cut, never reallocated.
//! - Every message starts with the timestamp, no matter what an abandoned
//!   message left behind.
//! - The format mode returns to decimal at the start of every message.
//! - The sink is released exactly once, by [`Logger::release`] or when the
//!   logger is dropped. [`Logger::into_sink`] returns it unreleased.
//!
//! # Errors
//!
//! Construction reports [`LogError`]. Write failures after construction are
//! counted by [`Logger::dropped_writes`] and never reach the caller.
//!
//! # Examples
//!
//! ```
//! use linelog::{info_log, Logger, Severity, HEX};
//! use linelog_sink::MemorySink;
//!
//! let sink = MemorySink::new();
//! let records = sink.records();
//! let mut logger = Logger::new(sink, Severity::Info)?;
//!
//! let port = 8080u16;
//! info_log!(logger, "listening on ", port, " flags ", HEX, 3u8);
//!
//! let mut message = logger.start(Severity::Error);
//! message.append_level(Severity::Error).append_str("manual line");
//! message.commit();
//!
//! let lines = records.lines();
//! assert!(lines[0].ends_with("INFO listening on 8080 flags 0x03\n"));
//! assert!(lines[1].ends_with("ERROR manual line\n"));
//! logger.release()?;
//! # Ok::<(), linelog::LogError>(())
//! ```

mod macros;

mod buffer;
mod config;
mod error;
mod format;
mod level;
mod logger;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod value;

pub use buffer::{MAX_LOG_MESSAGE_SIZE, MessageBuffer};
pub use config::{LoggerConfig, THRESHOLD_ENV, threshold_from_str};
pub use error::LogError;
pub use format::FormatMode;
pub use level::{Severity, UNKNOWN_LEVEL_TOKEN, level_token};
pub use logger::{Logger, LoggerBuilder, MAX_LOG_VALUES, Message, TRUNCATED_SUFFIX};
pub use timestamp::{Clock, TIMESTAMP_FORMAT, TIMESTAMP_LEN, local_now};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LineLogLayer, init_tracing, try_init_tracing};
pub use uuid::Uuid;
pub use value::{DEFAULT, HEX, LogValue};
