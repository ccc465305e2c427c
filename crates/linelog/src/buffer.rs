//! crates/linelog/src/buffer.rs
//! Fixed-capacity message accumulator with saturating appends.

use std::fmt;
use std::io;

use crate::LogError;

/// Capacity of a message buffer unless configured otherwise.
pub const MAX_LOG_MESSAGE_SIZE: usize = 4096;

/// Byte accumulator with a fixed capacity and a write cursor.
///
/// Appends never grow the storage. Content that does not fit is cut at the
/// remaining capacity and the rest is dropped, so the buffer always holds a
/// prefix of everything that was appended since the last [`clear`](Self::clear).
///
/// The buffer also implements [`fmt::Write`] and [`io::Write`] with the same
/// saturating behaviour: they report every byte as accepted even when part of
/// it was dropped, so formatting into a full buffer never fails.
pub struct MessageBuffer {
    bytes: Box<[u8]>,
    len: usize,
}

impl MessageBuffer {
    /// Allocates a zeroed buffer holding up to `capacity` bytes.
    ///
    /// Returns [`LogError::InvalidParameter`] for a zero capacity and
    /// [`LogError::ResourceExhausted`] when the allocation cannot be made.
    pub fn with_capacity(capacity: usize) -> Result<Self, LogError> {
        if capacity == 0 {
            return Err(LogError::InvalidParameter(
                "message buffer capacity must be non-zero",
            ));
        }
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(capacity)?;
        bytes.resize(capacity, 0);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            len: 0,
        })
    }

    /// Total number of bytes the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of bytes written since the last clear.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Reports whether nothing has been written since the last clear.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still available before content starts being truncated.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Reports whether further appends will be dropped entirely.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Zero-fills the storage and resets the cursor.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
        self.len = 0;
    }

    /// Resets the cursor without touching the storage.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Appends as much of `data` as fits and returns the number of bytes kept.
    pub fn append(&mut self, data: &[u8]) -> usize {
        let kept = data.len().min(self.remaining());
        self.bytes[self.len..self.len + kept].copy_from_slice(&data[..kept]);
        self.len += kept;
        kept
    }

    /// Appends the UTF-8 bytes of `text`, truncating like [`append`](Self::append).
    pub fn append_str(&mut self, text: &str) -> usize {
        self.append(text.as_bytes())
    }

    /// The bytes written since the last clear.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The full storage, including the zeroed tail past the cursor.
    #[must_use]
    pub fn storage(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}

impl io::Write for MessageBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("contents", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
