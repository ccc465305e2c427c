//! crates/linelog/src/timestamp.rs
//! Line timestamp prefix.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::buffer::MessageBuffer;

/// `YYYY-MM-DD HH:MM:SS ` including the separating space.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] ");

/// Length in bytes of a rendered [`TIMESTAMP_FORMAT`] prefix.
pub const TIMESTAMP_LEN: usize = 20;

/// Source of the instant stamped on each message.
pub type Clock = fn() -> OffsetDateTime;

/// Current local time, or UTC when the local offset cannot be determined.
///
/// Determining the offset can fail on platforms where reading the time zone
/// is unsound once other threads exist.
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Writes `instant` as a timestamp prefix, truncating at the buffer's capacity.
pub(crate) fn write_timestamp(buffer: &mut MessageBuffer, instant: OffsetDateTime) {
    // the buffer accepts every byte it is offered, so formatting only fails
    // for instants the format cannot express
    let _ = instant.format_into(buffer, TIMESTAMP_FORMAT);
}
