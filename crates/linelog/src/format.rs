//! crates/linelog/src/format.rs
//! Integer rendering modes.

/// Selects how integer values are rendered into a message.
///
/// The mode is per message: every message starts in [`FormatMode::Default`]
/// and the mode then stays in effect for all following integers until a
/// format marker changes it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatMode {
    /// Decimal, without padding.
    #[default]
    Default,
    /// `0x` followed by lowercase hexadecimal zero-padded to two digits per byte.
    Hex,
}

impl FormatMode {
    /// Reports whether integers are rendered in hexadecimal.
    #[must_use]
    pub const fn is_hex(self) -> bool {
        matches!(self, Self::Hex)
    }
}

impl From<bool> for FormatMode {
    /// `true` selects [`FormatMode::Hex`].
    fn from(hex: bool) -> Self {
        if hex { Self::Hex } else { Self::Default }
    }
}
