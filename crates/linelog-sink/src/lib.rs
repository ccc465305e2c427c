#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/linelog-sink/src/lib.rs
//!
//! # Overview
//!
//! `linelog-sink` provides the destinations a `linelog` logger hands its
//! committed lines to. A [`Sink`] receives one contiguous byte slice per
//! message and is released exactly once when its owner is done with it.
//!
//! # Design
//!
//! - [`DescriptorSink`] owns a file descriptor, typically a duplicate of
//!   standard output obtained through [`DescriptorSink::stdout`].
//! - [`WriterSink`] adapts any [`std::io::Write`] implementor.
//! - [`MemorySink`] records each write separately behind a shared handle so
//!   callers can inspect what was emitted after the sink has been moved into
//!   a logger.
//!
//! # Invariants
//!
//! - [`Sink::release`] consumes the sink, so a sink can never be released
//!   twice.
//! - Every call to [`Sink::write_raw`] writes the whole slice or reports an
//!   error; partial writes are retried until the slice is exhausted.
//!
//! # Errors
//!
//! Acquiring a sink can fail with [`SinkError::Unavailable`] when the
//! operating system refuses to duplicate a descriptor. Writes and releases
//! surface plain [`std::io::Error`] values from the underlying stream.
//!
//! # Examples
//!
//! ```
//! use linelog_sink::{MemorySink, Sink};
//!
//! let mut sink = MemorySink::new();
//! let records = sink.records();
//!
//! sink.write_raw(b"first\n")?;
//! sink.write_raw(b"second\n")?;
//! sink.release()?;
//!
//! assert_eq!(records.lines(), vec!["first\n", "second\n"]);
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod sink;

pub use error::SinkError;
#[cfg(unix)]
pub use sink::DescriptorSink;
pub use sink::{MemoryRecords, MemorySink, Sink, WriterSink};
