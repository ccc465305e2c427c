use std::fmt;
use std::io::{self, Write};

use super::Sink;

/// Sink that forwards committed lines to an [`io::Write`] target.
///
/// Each line is written with [`Write::write_all`] and followed by a flush so
/// buffered writers such as [`io::BufWriter`] never hold a committed line
/// back. Releasing the sink flushes once more and drops the writer.
///
/// # Examples
///
/// ```
/// use linelog_sink::{Sink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write_raw(b"ready\n")?;
/// assert_eq!(sink.into_inner(), b"ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W> WriterSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer without flushing.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &self.writer)
            .finish()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write,
{
    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }

    fn release(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
