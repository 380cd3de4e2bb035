#![cfg_attr(not(feature = "std"), no_std)]

//! # md4-hash
//!
//! MD4 message digest (RFC 1320) in portable Rust.
//!
//! MD4 is broken against collision attacks. Use it only where a legacy
//! protocol demands it (NTLM, eDonkey/Kad identifiers, rsync checksums).

//! # Usage
//! ```rust
//! use md4_hash::{digest, digest_str, to_hex, verify};
//!
//! // 1. Text input is hashed as UTF-8
//! let hash = digest_str("message digest");
//! assert_eq!(to_hex(&hash), "d9130a8164549fe818874806e1c7014b");
//!
//! // 2. Raw bytes
//! let hash = digest(b"message digest");
//! assert!(verify(b"message digest", &hash));
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export internal kernels for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::DIGEST_SIZE;
pub use oneshot::{
    digest, digest_batch, digest_bytes, digest_hex, digest_str, digest_str_hex, from_hex, md4,
    to_hex, verify,
};
pub use types::{DigestParseError, Input, Md4Digest};
