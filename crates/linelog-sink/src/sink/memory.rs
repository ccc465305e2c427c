//! crates/linelog-sink/src/sink/memory.rs
//! In-memory sink whose writes remain observable after it is moved away.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Sink;

#[derive(Debug, Default)]
struct State {
    writes: Vec<Vec<u8>>,
    releases: usize,
    fail_writes: bool,
    fail_release: bool,
}

/// Sink that records every write as a separate entry.
///
/// The recorded writes live behind a shared [`MemoryRecords`] handle obtained
/// through [`records`](Self::records), so they can still be inspected after
/// the sink itself has been moved into a logger. Failure injection for writes
/// and releases makes it possible to exercise error paths without a real
/// descriptor.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Arc<Mutex<State>>,
}

/// Shared view of the writes received by a [`MemorySink`].
#[derive(Clone, Debug)]
pub struct MemoryRecords {
    state: Arc<Mutex<State>>,
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent [`Sink::write_raw`] call fail without recording.
    #[must_use]
    pub fn failing_writes(self) -> Self {
        lock(&self.state).fail_writes = true;
        self
    }

    /// Makes [`Sink::release`] report an error.
    #[must_use]
    pub fn failing_release(self) -> Self {
        lock(&self.state).fail_release = true;
        self
    }

    /// Returns a handle observing this sink's writes.
    #[must_use]
    pub fn records(&self) -> MemoryRecords {
        MemoryRecords {
            state: Arc::clone(&self.state),
        }
    }
}

impl Sink for MemorySink {
    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut state = lock(&self.state);
        if state.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "memory sink rejects writes",
            ));
        }
        state.writes.push(bytes.to_vec());
        Ok(())
    }

    fn release(self) -> io::Result<()> {
        let mut state = lock(&self.state);
        state.releases += 1;
        if state.fail_release {
            Err(io::Error::other("memory sink release failed"))
        } else {
            Ok(())
        }
    }
}

impl MemoryRecords {
    /// Returns a copy of every write, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<Vec<u8>> {
        lock(&self.state).writes.clone()
    }

    /// Returns every write decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.state)
            .writes
            .iter()
            .map(|write| String::from_utf8_lossy(write).into_owned())
            .collect()
    }

    /// Number of successful writes received so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        lock(&self.state).writes.len()
    }

    /// Number of times the sink was released.
    #[must_use]
    pub fn release_count(&self) -> usize {
        lock(&self.state).releases
    }
}
