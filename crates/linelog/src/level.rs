//! crates/linelog/src/level.rs
//! Severity levels and their rendered tokens.

use std::fmt;
use std::str::FromStr;

use crate::LogError;

/// Token rendered for a raw level value that names no [`Severity`].
pub const UNKNOWN_LEVEL_TOKEN: &str = "UNKNOWN ";

/// Message severity, ordered from most to least critical.
///
/// The numeric values leave gaps so a raw threshold between two levels (for
/// example `25`) still compares meaningfully against every variant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u32)]
pub enum Severity {
    /// The process cannot continue normally.
    Critical = 0,
    /// An operation failed.
    Error = 10,
    /// Routine operational messages.
    Normal = 20,
    /// Informational detail.
    Info = 30,
    /// Detail useful when following the process closely.
    Verbose = 40,
    /// Developer diagnostics.
    #[default]
    Debug = 50,
}

impl Severity {
    /// Every level, most critical first.
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::Error,
        Self::Normal,
        Self::Info,
        Self::Verbose,
        Self::Debug,
    ];

    /// The most verbose level, used when no threshold is configured.
    pub const MOST_VERBOSE: Self = Self::Debug;

    /// Returns the numeric value of this level.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Maps a numeric value back to its level. Only exact values match.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Critical),
            10 => Some(Self::Error),
            20 => Some(Self::Normal),
            30 => Some(Self::Info),
            40 => Some(Self::Verbose),
            50 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Upper-case name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Normal => "NORMAL",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }

    /// Name followed by the single separator space written into a line.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL ",
            Self::Error => "ERROR ",
            Self::Normal => "NORMAL ",
            Self::Info => "INFO ",
            Self::Verbose => "VERBOSE ",
            Self::Debug => "DEBUG ",
        }
    }

    /// Reports whether a message at this level passes `threshold`.
    ///
    /// A message passes when it is at least as critical as the threshold.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.as_raw() <= threshold.as_raw()
    }
}

/// Returns the line token for a raw level value, or [`UNKNOWN_LEVEL_TOKEN`].
#[must_use]
pub const fn level_token(raw: u32) -> &'static str {
    match Severity::from_raw(raw) {
        Some(level) => level.token(),
        None => UNKNOWN_LEVEL_TOKEN,
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for u32 {
    fn from(level: Severity) -> Self {
        level.as_raw()
    }
}

impl TryFrom<u32> for Severity {
    type Error = LogError;

    fn try_from(raw: u32) -> Result<Self, LogError> {
        Self::from_raw(raw).ok_or(LogError::InvalidParameter("unknown severity level"))
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Parses a level name (any case) or its exact numeric value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<u32>() {
            return Self::try_from(raw);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or(LogError::InvalidParameter("unknown severity level"))
    }
}
