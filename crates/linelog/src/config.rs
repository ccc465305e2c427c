//! crates/linelog/src/config.rs
//! Logger settings and their environment source.

use std::env;

use crate::buffer::MAX_LOG_MESSAGE_SIZE;
use crate::level::Severity;
use crate::logger::MAX_LOG_VALUES;

/// Environment variable holding the threshold as a level name or number.
pub const THRESHOLD_ENV: &str = "LINELOG_THRESHOLD_LEVEL";

/// Settings consumed by [`Logger::from_config`](crate::Logger::from_config).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Least critical level that is still emitted.
    pub threshold: Severity,
    /// Message buffer size in bytes.
    pub capacity: usize,
    /// Maximum number of values per [`Logger::log`](crate::Logger::log) call.
    pub value_limit: Option<usize>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::MOST_VERBOSE,
            capacity: MAX_LOG_MESSAGE_SIZE,
            value_limit: Some(MAX_LOG_VALUES),
        }
    }
}

impl LoggerConfig {
    /// Default settings with the threshold taken from [`THRESHOLD_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        let value = env::var_os(THRESHOLD_ENV);
        let normalized = value.as_ref().map(|raw| raw.to_string_lossy());
        Self::from_env_value(normalized.as_deref())
    }

    /// Default settings with the threshold parsed from `value`.
    ///
    /// Absent or unparsable values select [`Severity::MOST_VERBOSE`].
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        let threshold = value
            .and_then(threshold_from_str)
            .unwrap_or(Severity::MOST_VERBOSE);
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Parses a threshold given as a level name or a number.
///
/// Names match case-insensitively. A number selects the most verbose level
/// whose value does not exceed it, so `25` yields [`Severity::Normal`] and
/// anything above `50` yields [`Severity::Debug`]. Returns `None` for text
/// that is neither.
#[must_use]
pub fn threshold_from_str(text: &str) -> Option<Severity> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        // digit strings too long for u64 are still above every level
        let raw = trimmed.parse::<u64>().unwrap_or(u64::MAX);
        return Severity::ALL
            .into_iter()
            .rev()
            .find(|level| u64::from(level.as_raw()) <= raw);
    }
    Severity::ALL
        .into_iter()
        .find(|level| level.name().eq_ignore_ascii_case(trimmed))
}
