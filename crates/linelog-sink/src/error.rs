use std::io;

use thiserror::Error;

/// Errors raised while acquiring a [`Sink`](crate::Sink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying stream could not be acquired, for example because
    /// duplicating standard output failed.
    #[error("log sink unavailable: {0}")]
    Unavailable(#[source] io::Error),
}

impl SinkError {
    /// Returns the operating system error that caused the failure.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Unavailable(error) => error,
        }
    }
}

impl From<SinkError> for io::Error {
    fn from(error: SinkError) -> Self {
        match error {
            SinkError::Unavailable(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display_includes_cause() {
        let error = SinkError::Unavailable(io::Error::from_raw_os_error(9));
        let rendered = error.to_string();
        assert!(rendered.starts_with("log sink unavailable: "));
    }

    #[test]
    fn io_error_exposes_source() {
        let error = SinkError::Unavailable(io::Error::other("dup"));
        assert_eq!(error.io_error().kind(), io::ErrorKind::Other);
    }

    #[test]
    fn converts_into_io_error() {
        let error = SinkError::Unavailable(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let converted: io::Error = error.into();
        assert_eq!(converted.kind(), io::ErrorKind::NotFound);
    }
}
