use std::fmt::{self, Write as _};

use linelog_sink::Sink;
use uuid::Uuid;

use super::{Logger, TRUNCATED_SUFFIX};
use crate::format::FormatMode;
use crate::level::{self, Severity};
use crate::value::LogValue;

/// A message under construction.
///
/// Created by [`Logger::start`]; while it is alive the logger is mutably
/// borrowed, so only one message can be in flight. Every append truncates at
/// the buffer's capacity. [`commit`](Self::commit) writes the line to the
/// sink; dropping the message without committing discards it.
#[must_use = "a message is only written once it is committed"]
pub struct Message<'a, S: Sink> {
    logger: &'a mut Logger<S>,
}

macro_rules! integer_appenders {
    ($($(#[$doc:meta])* $name:ident: $ty:ty => $digits:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self, value: $ty) -> &mut Self {
                let buffer = &mut self.logger.buffer;
                // the buffer saturates instead of failing
                let _ = if self.logger.format.is_hex() {
                    write!(buffer, "0x{value:0width$x}", width = $digits)
                } else {
                    write!(buffer, "{value}")
                };
                self
            }
        )*
    };
}

impl<'a, S> Message<'a, S>
where
    S: Sink,
{
    pub(super) fn new(logger: &'a mut Logger<S>) -> Self {
        Self { logger }
    }

    /// Level recorded when the message was started.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.logger.level
    }

    /// Format mode that applies to the next integer.
    #[must_use]
    pub fn format(&self) -> FormatMode {
        self.logger.format
    }

    /// Bytes written so far, timestamp included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logger.buffer.len()
    }

    /// Reports whether nothing has been written, which only happens when the
    /// buffer cannot even hold part of the timestamp.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logger.buffer.is_empty()
    }

    /// Bytes that can still be appended before truncation starts.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.logger.buffer.remaining()
    }

    /// The message as built so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.logger.buffer.as_bytes()
    }

    /// Changes how subsequent integers are rendered. Appends nothing.
    pub fn set_format(&mut self, mode: FormatMode) -> &mut Self {
        self.logger.format = mode;
        self
    }

    /// Appends `text` verbatim.
    pub fn append_str(&mut self, text: &str) -> &mut Self {
        self.logger.buffer.append_str(text);
        self
    }

    /// Appends `bytes` verbatim.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.logger.buffer.append(bytes);
        self
    }

    integer_appenders! {
        /// Appends an 8-bit unsigned integer (`0x` + 2 digits in hex mode).
        append_u8: u8 => 2;
        /// Appends a 16-bit unsigned integer (`0x` + 4 digits in hex mode).
        append_u16: u16 => 4;
        /// Appends a 32-bit unsigned integer (`0x` + 8 digits in hex mode).
        append_u32: u32 => 8;
        /// Appends a 64-bit unsigned integer (`0x` + 16 digits in hex mode).
        append_u64: u64 => 16;
        /// Appends an 8-bit signed integer; hex mode renders its two's complement bits.
        append_i8: i8 => 2;
        /// Appends a 16-bit signed integer; hex mode renders its two's complement bits.
        append_i16: i16 => 4;
        /// Appends a 32-bit signed integer; hex mode renders its two's complement bits.
        append_i32: i32 => 8;
        /// Appends a 64-bit signed integer; hex mode renders its two's complement bits.
        append_i64: i64 => 16;
    }

    /// Appends `id` in hyphenated lowercase form, independent of the format mode.
    pub fn append_uuid(&mut self, id: &Uuid) -> &mut Self {
        let mut encoded = Uuid::encode_buffer();
        let text = id.hyphenated().encode_lower(&mut encoded);
        self.logger.buffer.append_str(text);
        self
    }

    /// Appends the token for `level`, for example `INFO `.
    pub fn append_level(&mut self, level: Severity) -> &mut Self {
        self.logger.buffer.append_str(level.token());
        self
    }

    /// Appends the token for a raw level value, `UNKNOWN ` when it names no level.
    pub fn append_raw_level(&mut self, raw: u32) -> &mut Self {
        self.logger.buffer.append_str(level::level_token(raw));
        self
    }

    /// Dispatches `value` to the matching append operation.
    pub fn append_value(&mut self, value: LogValue<'_>) -> &mut Self {
        match value {
            LogValue::Str(text) => self.append_str(text),
            LogValue::Bytes(bytes) => self.append_bytes(bytes),
            LogValue::U8(v) => self.append_u8(v),
            LogValue::U16(v) => self.append_u16(v),
            LogValue::U32(v) => self.append_u32(v),
            LogValue::U64(v) => self.append_u64(v),
            LogValue::I8(v) => self.append_i8(v),
            LogValue::I16(v) => self.append_i16(v),
            LogValue::I32(v) => self.append_i32(v),
            LogValue::I64(v) => self.append_i64(v),
            LogValue::Uuid(id) => self.append_uuid(&id),
            LogValue::Level(level) => self.append_level(level),
            LogValue::Format(mode) => self.set_format(mode),
        }
    }

    /// Dispatches `values` in order, honouring the logger's value limit.
    ///
    /// Values past the limit are dropped; the format mode is then reset and
    /// [`TRUNCATED_SUFFIX`] appended.
    pub fn append_values(&mut self, values: &[LogValue<'_>]) -> &mut Self {
        let limit = self.logger.value_limit.unwrap_or(usize::MAX);
        for value in values.iter().take(limit) {
            self.append_value(*value);
        }
        if values.len() > limit {
            self.set_format(FormatMode::Default);
            self.append_str(TRUNCATED_SUFFIX);
        }
        self
    }

    /// Terminates the line and hands it to the sink.
    ///
    /// The newline is subject to truncation like any other byte, so a full
    /// buffer is written without one. A failed write is counted in
    /// [`Logger::dropped_writes`] and otherwise ignored. The buffer is reset
    /// afterwards.
    pub fn commit(self) {
        let logger = self.logger;
        logger.buffer.append(b"\n");
        let written = match logger.sink.as_mut() {
            Some(sink) => sink.write_raw(logger.buffer.as_bytes()).is_ok(),
            None => false,
        };
        if !written {
            logger.dropped_writes += 1;
        }
        logger.buffer.reset();
    }
}

impl<S: Sink> fmt::Write for Message<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}

impl<S: Sink> fmt::Debug for Message<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("level", &self.logger.level)
            .field("format", &self.logger.format)
            .field("contents", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
