//! crates/linelog-sink/src/sink/descriptor.rs
//! Descriptor-backed sink and the standard output duplication path.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, IntoRawFd, OwnedFd, RawFd};

use super::Sink;
use crate::SinkError;

/// Sink that writes to a file descriptor it owns.
///
/// The descriptor is closed when the sink is released or dropped. Use
/// [`DescriptorSink::stdout`] to log to a private duplicate of standard
/// output, leaving the process's own descriptor 1 untouched.
pub struct DescriptorSink {
    file: File,
}

impl DescriptorSink {
    /// Wraps an owned descriptor. Ownership transfers to the sink.
    #[must_use]
    pub fn new(fd: OwnedFd) -> Self {
        Self {
            file: File::from(fd),
        }
    }

    /// Duplicates `fd` and wraps the duplicate.
    ///
    /// The caller keeps ownership of `fd`. When duplication fails nothing is
    /// acquired and [`SinkError::Unavailable`] is returned.
    pub fn duplicate(fd: BorrowedFd<'_>) -> Result<Self, SinkError> {
        let owned = fd.try_clone_to_owned().map_err(SinkError::Unavailable)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            source = fd.as_raw_fd(),
            duplicate = owned.as_raw_fd(),
            "duplicated log descriptor"
        );
        Ok(Self::new(owned))
    }

    /// Duplicates the process's standard output and wraps the duplicate.
    pub fn stdout() -> Result<Self, SinkError> {
        let stdout = io::stdout();
        Self::duplicate(stdout.as_fd())
    }

    /// Returns the raw descriptor number, for diagnostics only.
    #[must_use]
    pub fn raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl From<OwnedFd> for DescriptorSink {
    fn from(fd: OwnedFd) -> Self {
        Self::new(fd)
    }
}

impl From<File> for DescriptorSink {
    fn from(file: File) -> Self {
        Self { file }
    }
}

impl AsFd for DescriptorSink {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }
}

impl fmt::Debug for DescriptorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorSink")
            .field("fd", &self.file.as_raw_fd())
            .finish()
    }
}

impl Sink for DescriptorSink {
    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.file.write_all(bytes)
    }

    #[allow(unsafe_code)]
    fn release(self) -> io::Result<()> {
        let fd = self.file.into_raw_fd();
        // SAFETY: `into_raw_fd` relinquished ownership, so this is the only
        // close of `fd`.
        let result = unsafe { libc::close(fd) };
        if result == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(fd, "closed log descriptor");
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}
