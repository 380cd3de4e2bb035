//! Digest assembly: final state words serialized little-endian, A first.

use crate::kernels::compress::State;
use crate::kernels::constants::{DIGEST_SIZE, WORD_SIZE};

/// Serialize `state` into the 16-byte digest.
#[must_use]
pub fn assemble(state: State) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, word) in out.chunks_exact_mut(WORD_SIZE).zip(state.to_words()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
