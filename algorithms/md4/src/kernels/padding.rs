//! Message Padding
//!
//! Extends a message to a whole number of blocks: one `0x80` marker byte,
//! zero fill up to offset 56 of the last block, then the original length in
//! bits as a little-endian `u64`.

use crate::kernels::constants::{BLOCK_SIZE, LENGTH_FIELD_SIZE, LENGTH_OFFSET, PAD_MARKER};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// PADDED MESSAGE
// =============================================================================

/// A message copy whose length is always a multiple of [`BLOCK_SIZE`].
///
/// The only constructor is [`pad`], so every value is block-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
}

impl PaddedMessage {
    /// Iterate over the 64-byte blocks in order.
    pub fn blocks(&self) -> core::slice::Iter<'_, [u8; BLOCK_SIZE]> {
        let (blocks, _rest) = self.bytes.as_chunks::<BLOCK_SIZE>();
        blocks.iter()
    }

    /// Number of 64-byte blocks.
    #[must_use]
    pub const fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_SIZE
    }

    /// Total padded length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true: padding always adds at least one block.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw padded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// =============================================================================
// LOGIC
// =============================================================================

/// Length of the padded form of a `len`-byte message.
///
/// Always at least `len + 9` and at most `len + 72`.
#[must_use]
pub const fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Pad `message` per RFC 1320 section 3.1 and 3.2.
///
/// The caller's bytes are copied, never modified. The bit length wraps
/// modulo 2^64 for inputs of 2^61 bytes or more, as the standard specifies.
#[must_use]
pub fn pad(message: &[u8]) -> PaddedMessage {
    let total = padded_len(message.len());
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(PAD_MARKER);
    // Zero fill lands the length field at offset 56 of the last block
    bytes.resize(total - LENGTH_FIELD_SIZE, 0);
    bytes.extend_from_slice(&bit_len.to_le_bytes());

    debug_assert_eq!(bytes.len() % BLOCK_SIZE, 0);
    debug_assert_eq!((bytes.len() - LENGTH_FIELD_SIZE) % BLOCK_SIZE, LENGTH_OFFSET);

    PaddedMessage { bytes }
}

// =============================================================================
// TESTS
// =============================================================================
