//! crates/linelog/src/error.rs
//! Construction and release errors.

use std::collections::TryReserveError;
use std::io;

use linelog_sink::SinkError;
use thiserror::Error;

/// Errors returned while constructing or releasing a [`Logger`](crate::Logger).
///
/// Failures while writing a committed line are never reported through this
/// type; they are counted by [`Logger::dropped_writes`](crate::Logger::dropped_writes).
#[derive(Debug, Error)]
pub enum LogError {
    /// A constructor argument was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// Memory for the message buffer could not be reserved.
    #[error("out of memory while allocating the message buffer")]
    ResourceExhausted(#[from] TryReserveError),
    /// The output stream could not be acquired.
    #[error("log sink unavailable: {0}")]
    SinkUnavailable(#[source] io::Error),
    /// Closing the owned sink failed.
    #[error("failed to release log sink: {0}")]
    Release(#[source] io::Error),
}

impl From<SinkError> for LogError {
    fn from(error: SinkError) -> Self {
        match error {
            SinkError::Unavailable(inner) => Self::SinkUnavailable(inner),
        }
    }
}
