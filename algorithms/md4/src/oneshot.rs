//! Public API Layer
//!
use crate::kernels::compress::{process, State};
use crate::kernels::constants::DIGEST_SIZE;
use crate::kernels::finalize::assemble;
use crate::kernels::padding::pad;
use crate::types::{DigestParseError, Input, Md4Digest};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the MD4 digest of raw bytes.
///
/// # Example
/// ```rust
/// let digest = md4_hash::digest(b"");
/// assert_eq!(md4_hash::to_hex(&digest), "31d6cfe0d16ae931b73c59d7e0c089c0");
/// ```
#[must_use]
pub fn digest(input: &[u8]) -> Md4Digest {
    let padded = pad(input);
    assemble(process(&padded, State::INITIAL))
}

/// Compute the MD4 digest of raw bytes (file contents, protocol fields).
///
/// Same as [`digest`]; named for symmetry with [`digest_str`].
#[must_use]
#[inline]
pub fn digest_bytes(bytes: &[u8]) -> Md4Digest {
    digest(bytes)
}

/// Compute the MD4 digest of a string's UTF-8 encoding.
///
/// # Example
/// ```rust
/// let digest = md4_hash::digest_str("hello world");
/// assert_eq!(md4_hash::to_hex(&digest), "aa010fbc1d14c795d86ef98c95479d17");
/// ```
#[must_use]
#[inline]
pub fn digest_str(text: &str) -> Md4Digest {
    digest(text.as_bytes())
}

/// Compute the MD4 digest of tagged input.
///
/// # Example
/// ```rust
/// use md4_hash::{md4, Input};
///
/// assert_eq!(md4(Input::Text("abc")), md4(Input::Bytes(b"abc")));
/// ```
#[must_use]
#[inline]
pub fn md4(input: Input<'_>) -> Md4Digest {
    digest(input.as_bytes())
}

// =============================================================================
// HEX PRESENTATION
// =============================================================================

/// Render a digest as 32 lowercase hex characters.
#[must_use]
pub fn to_hex(digest: &Md4Digest) -> String {
    hex::encode(digest)
}

/// Hex digest of raw bytes.
#[must_use]
pub fn digest_hex(input: &[u8]) -> String {
    to_hex(&digest(input))
}

/// Hex digest of a string's UTF-8 encoding.
#[must_use]
pub fn digest_str_hex(text: &str) -> String {
    to_hex(&digest_str(text))
}

/// Parse a 32-character hex digest. Case-insensitive; surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`DigestParseError`] if the trimmed input is not exactly 32 hex characters.
///
/// # Example
/// ```rust
/// let parsed = md4_hash::from_hex("31D6CFE0D16AE931B73C59D7E0C089C0")?;
/// assert_eq!(parsed, md4_hash::digest(b""));
/// # Ok::<(), md4_hash::DigestParseError>(())
/// ```
pub fn from_hex(text: &str) -> Result<Md4Digest, DigestParseError> {
    let trimmed = text.trim();
    let found = trimmed.chars().count();
    if found != DIGEST_SIZE * 2 {
        return Err(DigestParseError::InvalidLength { found });
    }

    // Offsets are in characters, not bytes
    if let Some((index, character)) = trimmed
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(DigestParseError::InvalidCharacter { index, character });
    }

    // All 32 characters are ASCII hex digits here, so decoding cannot fail
    let mut out = [0u8; DIGEST_SIZE];
    hex::decode_to_slice(trimmed, &mut out)
        .map_err(|_| DigestParseError::InvalidLength { found })?;
    Ok(out)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check `input` against an expected digest in constant time.
///
/// # Example
/// ```rust
/// let expected = md4_hash::digest(b"payload");
/// assert!(md4_hash::verify(b"payload", &expected));
/// assert!(!md4_hash::verify(b"tampered", &expected));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Md4Digest) -> bool {
    let computed = digest(input);
    computed.ct_eq(expected).into()
}

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Digest many independent inputs; output order follows input order.
///
/// With the `multithread` feature the inputs are spread over the rayon pool.
/// Each individual digest is still computed serially.
#[must_use]
pub fn digest_batch(inputs: &[&[u8]]) -> Vec<Md4Digest> {
    #[cfg(feature = "multithread")]
    {
        use rayon::prelude::*;
        inputs.par_iter().map(|input| digest(input)).collect()
    }
    #[cfg(not(feature = "multithread"))]
    {
        inputs.iter().map(|input| digest(input)).collect()
    }
}
