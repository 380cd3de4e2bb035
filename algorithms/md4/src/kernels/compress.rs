//! Block Compression
//!
//! Three rounds of sixteen steps over a single 64-byte block, followed by
//! feed-forward of the pre-block state. All word arithmetic wraps at 2^32.

use crate::kernels::constants::{
    BLOCK_SIZE, INITIAL_STATE, ROUND1_ORDER, ROUND1_SHIFTS, ROUND2_CONSTANT, ROUND2_ORDER,
    ROUND2_SHIFTS, ROUND3_CONSTANT, ROUND3_ORDER, ROUND3_SHIFTS, WORDS_PER_BLOCK, WORD_SIZE,
};
use crate::kernels::padding::PaddedMessage;

// =============================================================================
// STATE
// =============================================================================

/// The four 32-bit chaining words carried from block to block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Word A.
    pub a: u32,
    /// Word B.
    pub b: u32,
    /// Word C.
    pub c: u32,
    /// Word D.
    pub d: u32,
}

impl State {
    /// State before the first block.
    pub const INITIAL: Self = Self::from_words(INITIAL_STATE);

    /// Build a state from `[A, B, C, D]`.
    #[must_use]
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self {
            a: words[0],
            b: words[1],
            c: words[2],
            d: words[3],
        }
    }

    /// Words in `[A, B, C, D]` order.
    #[must_use]
    pub const fn to_words(self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Word-wise wrapping sum, used for feed-forward.
    #[must_use]
    const fn wrapping_add(self, other: Self) -> Self {
        Self {
            a: self.a.wrapping_add(other.a),
            b: self.b.wrapping_add(other.b),
            c: self.c.wrapping_add(other.c),
            d: self.d.wrapping_add(other.d),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Round 1 choice: `x ? y : z`, bitwise.
#[inline]
#[must_use]
pub const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Round 2 majority.
#[inline]
#[must_use]
pub const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Round 3 parity.
#[inline]
#[must_use]
pub const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Rotate `x` left by `n` bits, `n` in `0..32`.
///
/// `n == 0` is the identity; the `>> 32` it would otherwise need never happens.
#[inline]
#[must_use]
pub const fn rotate_left(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

/// Read the 16 little-endian message words of a block.
#[must_use]
pub fn parse_block(block: &[u8; BLOCK_SIZE]) -> [u32; WORDS_PER_BLOCK] {
    let (chunks, _rest) = block.as_chunks::<WORD_SIZE>();
    let mut words = [0u32; WORDS_PER_BLOCK];
    for (word, chunk) in words.iter_mut().zip(chunks) {
        *word = u32::from_le_bytes(*chunk);
    }
    words
}

// =============================================================================
// ROUNDS
// =============================================================================

type RoundFn = fn(u32, u32, u32) -> u32;

/// One step: `target = rotl(target + round(x, y, z) + m + k, s)`.
#[inline]
const fn step(target: u32, mixed: u32, m: u32, k: u32, s: u32) -> u32 {
    rotate_left(target.wrapping_add(mixed).wrapping_add(m).wrapping_add(k), s)
}

/// Run one 16-step round over `s`.
#[inline]
fn round(
    s: &mut State,
    x: &[u32; WORDS_PER_BLOCK],
    func: RoundFn,
    k: u32,
    order: &[[usize; 4]; 4],
    shifts: &[u32; 4],
) {
    for quad in order {
        s.a = step(s.a, func(s.b, s.c, s.d), x[quad[0]], k, shifts[0]);
        s.d = step(s.d, func(s.a, s.b, s.c), x[quad[1]], k, shifts[1]);
        s.c = step(s.c, func(s.d, s.a, s.b), x[quad[2]], k, shifts[2]);
        s.b = step(s.b, func(s.c, s.d, s.a), x[quad[3]], k, shifts[3]);
    }
}

/// Compress a single 64-byte block into `state`.
#[must_use]
pub fn compress(state: State, block: &[u8; BLOCK_SIZE]) -> State {
    let x = parse_block(block);
    let saved = state;
    let mut s = state;

    round(&mut s, &x, f, 0, &ROUND1_ORDER, &ROUND1_SHIFTS);
    round(&mut s, &x, g, ROUND2_CONSTANT, &ROUND2_ORDER, &ROUND2_SHIFTS);
    round(&mut s, &x, h, ROUND3_CONSTANT, &ROUND3_ORDER, &ROUND3_SHIFTS);

    s.wrapping_add(saved)
}

/// Fold [`compress`] over every block of `padded`, in order.
///
/// Each block depends on the previous block's output, so this loop is strictly serial.
#[must_use]
pub fn process(padded: &PaddedMessage, state: State) -> State {
    padded.blocks().fold(state, compress)
}

// =============================================================================
// TESTS
// =============================================================================
