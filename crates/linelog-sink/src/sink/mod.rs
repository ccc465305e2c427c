use std::io;

#[cfg(unix)]
mod descriptor;
mod memory;
mod writer;

#[cfg(unix)]
pub use descriptor::DescriptorSink;
pub use memory::{MemoryRecords, MemorySink};
pub use writer::WriterSink;

/// Destination for committed log lines.
///
/// A logger calls [`write_raw`](Self::write_raw) once per committed message
/// with the complete line, terminator included. Implementations must not
/// split or reorder the bytes of a single call.
///
/// Ownership of a sink is exclusive: whoever holds the value is the only
/// writer, and [`release`](Self::release) takes `self` so the stream is
/// closed exactly once. Dropping a sink without calling `release` still
/// closes it, but any close error is lost.
pub trait Sink {
    /// Writes every byte of `bytes` to the underlying stream.
    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Releases the underlying stream, reporting any failure while closing it.
    fn release(self) -> io::Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}
