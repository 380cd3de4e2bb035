//! MD4 Kernel Constants
//!
//! Every value here is fixed by RFC 1320. The round tables are written out
//! in full rather than computed so each one can be checked against the RFC
//! line by line.
//!
//! Step layout: each round runs four quadruples, and each quadruple updates
//! the state words in the order A, D, C, B. Column `i` of a shift table is
//! the rotation for the `i`-th word of that order.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Block size for the compression function (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Size of a single message word (in bytes).
pub const WORD_SIZE: usize = 4;

/// Number of message words per block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / WORD_SIZE;

/// Digest output size in bytes (128-bit digest).
pub const DIGEST_SIZE: usize = 16;

/// Size of the trailing bit-length field (in bytes).
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Offset within the final block where the length field starts.
pub const LENGTH_OFFSET: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE;

/// Marker byte appended directly after the message (a single `1` bit).
pub const PAD_MARKER: u8 = 0x80;

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Initial chaining values `[A, B, C, D]`.
pub const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// Round 2 additive constant: floor(sqrt(2) * 2^30).
pub const ROUND2_CONSTANT: u32 = 0x5A82_7999;

/// Round 3 additive constant: floor(sqrt(3) * 2^30).
pub const ROUND3_CONSTANT: u32 = 0x6ED9_EBA1;

// =============================================================================
// ROTATION TABLES
// =============================================================================

/// Round 1 rotations for (A, D, C, B).
pub const ROUND1_SHIFTS: [u32; 4] = [3, 7, 11, 19];

/// Round 2 rotations for (A, D, C, B).
pub const ROUND2_SHIFTS: [u32; 4] = [3, 5, 9, 13];

/// Round 3 rotations for (A, D, C, B).
pub const ROUND3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

// =============================================================================
// MESSAGE ORDER TABLES
// =============================================================================

/// Round 1 message-word order: natural, row by row.
pub const ROUND1_ORDER: [[usize; 4]; 4] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
];

/// Round 2 message-word order: column-major walk of the 4x4 word grid.
pub const ROUND2_ORDER: [[usize; 4]; 4] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
];

/// Round 3 message-word order: bit-reversed interleave.
pub const ROUND3_ORDER: [[usize; 4]; 4] = [
    [0, 8, 4, 12],
    [2, 10, 6, 14],
    [1, 9, 5, 13],
    [3, 11, 7, 15],
];
