//! crates/linelog/src/value.rs
//! Type-tagged values accepted by the logging entry points.

use uuid::Uuid;

use crate::format::FormatMode;
use crate::level::Severity;

/// Marker switching the rest of the message to hexadecimal integers.
pub const HEX: LogValue<'static> = LogValue::Format(FormatMode::Hex);

/// Marker switching the rest of the message back to decimal integers.
pub const DEFAULT: LogValue<'static> = LogValue::Format(FormatMode::Default);

/// One element of a log line.
///
/// Every variant maps to exactly one append operation on a
/// [`Message`](crate::Message). [`LogValue::Format`] is a marker: it changes
/// how the following integers are rendered and produces no output itself.
///
/// Values are usually produced through the [`From`] conversions, which is
/// what the logging macros do for each argument:
///
/// ```
/// use linelog::{LogValue, HEX};
///
/// let values = [LogValue::from("port "), LogValue::from(8080u16), HEX];
/// assert_eq!(values[1], LogValue::U16(8080));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogValue<'a> {
    /// Text appended verbatim, without quoting or escaping.
    Str(&'a str),
    /// Raw bytes appended verbatim.
    Bytes(&'a [u8]),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// 128-bit identifier rendered in hyphenated form.
    Uuid(Uuid),
    /// Severity token such as `INFO `.
    Level(Severity),
    /// Format marker; see [`HEX`] and [`DEFAULT`].
    Format(FormatMode),
}

impl LogValue<'_> {
    /// Reports whether this value only changes the format mode.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

macro_rules! impl_from_copy {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LogValue<'_> {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_copy! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    Uuid => Uuid,
    Severity => Level,
    FormatMode => Format,
}

impl From<usize> for LogValue<'_> {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl From<isize> for LogValue<'_> {
    fn from(value: isize) -> Self {
        Self::I64(value as i64)
    }
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for LogValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for LogValue<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl From<&Uuid> for LogValue<'_> {
    fn from(value: &Uuid) -> Self {
        Self::Uuid(*value)
    }
}
