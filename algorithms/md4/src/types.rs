//! Shared types used across the MD4 library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::DIGEST_SIZE;

// =============================================================================
// DIGEST
// =============================================================================

/// A finished 128-bit MD4 digest.
pub type Md4Digest = [u8; DIGEST_SIZE];

// =============================================================================
// INPUT SELECTION
// =============================================================================

/// Input tagged with its encoding; the variant decides how it becomes bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// A string; hashed as UTF-8.
    Text(&'a str),
    /// Raw bytes.
    Bytes(&'a [u8]),
}

impl<'a> Input<'a> {
    /// The bytes that get hashed.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error parsing a hex digest string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestParseError {
    /// Input was not exactly 32 hex characters.
    InvalidLength {
        /// Number of characters found after trimming.
        found: usize,
    },
    /// A non-hex character was found.
    InvalidCharacter {
        /// Character offset within the trimmed input.
        index: usize,
        /// The offending character.
        character: char,
    },
}

impl fmt::Display for DigestParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { found } => write!(
                f,
                "MD4 digest must be {} hex characters, found {found}",
                DIGEST_SIZE * 2
            ),
            Self::InvalidCharacter { index, character } => {
                write!(f, "invalid hex character {character:?} at position {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for DigestParseError {}
