//! Lag-256 multiply-with-carry random number generator
//!
//! This is a fast, high-quality PRNG (Marsaglia's MWC family) that is
//! deterministic and suitable for simulation and synthetic-data purposes.
//!
//! # Algorithm
//!
//! Each step multiplies one slot of a 256-word lag table by a fixed
//! constant, adds the carry from the previous step, and folds the carry of
//! that addition back in. The table cursor is a `u8`, so it wraps over the
//! table without masking.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (verify behavior)
//! - Research (validate results)
//!
//! Booleans and bytes are carved out of buffered 32-bit words, so their
//! streams are part of the reproducibility contract too.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of 32-bit words in the lag table.
const TABLE_SIZE: usize = 256;

/// Multiplier of the multiply-with-carry recurrence, chosen for lag 256.
const MWC_MULTIPLIER: u64 = 1_540_315_826;

/// Multiplier of the avalanche seeding pass (Knuth's generator-seeding
/// recurrence).
const SEED_MIX_MULTIPLIER: u32 = 1_812_433_253;

/// Modulus applied to the last table word to form the initial carry.
const INITIAL_CARRY_MODULUS: u32 = 61_137_367;

/// 2^-32, the scale of one 32-bit word in a unit-interval double.
const WORD_SCALE: f64 = 2.328_306_436_538_696_289_062_5e-10;

/// 2^-54 offset that keeps unit-interval doubles strictly above zero.
const OPEN_INTERVAL_OFFSET: f64 = 5.551_115_123_125_783e-17;

/// Largest acceptable unit-interval double, 1 - 2^-53. Anything above is
/// rejected so the caller can never observe 1.0.
const OPEN_INTERVAL_MAX: f64 = 0.999_999_999_999_999_89;

/// Errors that can occur when driving the generator with invalid arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("seed array must contain at least one word")]
    EmptySeed,

    #[error("invalid range: begin {begin} must be less than end {end}")]
    InvalidRange { begin: i64, end: i64 },
}

/// Deterministic random number generator using lag-256 multiply-with-carry
///
/// Each instance is exclusively owned by its caller; concurrent use from
/// multiple threads requires one instance per thread.
///
/// # Example
/// ```
/// use stochastic_core_rs::Mwc256;
///
/// let mut rng = Mwc256::with_seed(12345);
/// let word = rng.next_u32();
/// let value = rng.int_range(0, 100).unwrap(); // [0, 100)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mwc256 {
    /// Lag table; fully initialized by every (re)seed
    #[serde(with = "lag_table")]
    table: [u32; TABLE_SIZE],

    /// Cursor into the table; wraps modulo 256 by virtue of its width
    index: u8,

    /// Carry threaded from one step to the next
    carry: u32,

    /// Unused bits (0-31) remaining in `bit_reservoir`
    bit_budget: u8,

    /// Buffered word from which booleans are consumed, low bit first
    bit_reservoir: u32,

    /// Unused bytes (0-3) remaining in `byte_reservoir`
    byte_budget: u8,

    /// Buffered word from which bytes are consumed, index 3 down to 0
    byte_reservoir: u32,
}

impl Mwc256 {
    /// Create a new generator from a single integer seed
    ///
    /// Behaves identically to [`Mwc256::with_seed_array`] called with a
    /// one-element array; the avalanche pass spreads even small seeds over
    /// the whole table.
    ///
    /// # Example
    /// ```
    /// use stochastic_core_rs::Mwc256;
    ///
    /// let mut a = Mwc256::with_seed(42);
    /// let mut b = Mwc256::with_seed(42);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self::zeroed();
        rng.seed_in_place(&[seed]);
        rng
    }

    /// Create a new generator from an array of integer seeds
    ///
    /// Seed words are folded by XOR into successive pairs of table slots
    /// (wrapping around for more than 128 words) before the avalanche pass.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EmptySeed`] if `words` is empty.
    pub fn with_seed_array(words: &[u64]) -> Result<Self, RngError> {
        if words.is_empty() {
            return Err(RngError::EmptySeed);
        }
        let mut rng = Self::zeroed();
        rng.seed_in_place(words);
        Ok(rng)
    }

    /// Reset an existing generator to the stream of a single integer seed
    ///
    /// Afterwards the generator is indistinguishable from a fresh
    /// `Mwc256::with_seed(seed)`: the boolean and byte reservoirs are
    /// cleared, so no bits of the previous stream leak into the new one.
    pub fn reseed(&mut self, seed: u64) {
        self.seed_in_place(&[seed]);
    }

    /// Reset an existing generator to the stream of a seed array
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EmptySeed`] if `words` is empty; the generator
    /// state is left untouched in that case.
    pub fn reseed_array(&mut self, words: &[u64]) -> Result<(), RngError> {
        if words.is_empty() {
            return Err(RngError::EmptySeed);
        }
        self.seed_in_place(words);
        Ok(())
    }

    /// Generate the next random u32 value
    ///
    /// This is the word engine every other draw reduces to. It advances the
    /// cursor, runs one multiply-with-carry step and writes the result back
    /// into the lag table.
    pub fn next_u32(&mut self) -> u32 {
        self.index = self.index.wrapping_add(1);
        let slot = usize::from(self.index);

        let t = MWC_MULTIPLIER * u64::from(self.table[slot]) + u64::from(self.carry);
        let mut carry = (t >> 32) as u32;
        let (mut x, overflowed) = (t as u32).overflowing_add(carry);
        if overflowed {
            // The addition itself carried; fold that carry in as well.
            // Skipping this step biases the output.
            x = x.wrapping_add(1);
            carry = carry.wrapping_add(1);
        }

        self.carry = carry;
        self.table[slot] = x;
        x
    }

    /// Generate the next random u64 value
    ///
    /// Composed from two words; the first word drawn becomes the low half,
    /// which is part of the reproducibility contract.
    pub fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32();
        let hi = self.next_u32();
        (u64::from(hi) << 32) | u64::from(lo)
    }

    /// Generate a random f64 in the open interval (0, 1)
    ///
    /// Never returns exactly 0.0 or 1.0. The full 53-bit mantissa is
    /// reconstructed from two words (high word first). Values that would
    /// round up to 1.0 are rejected and redrawn.
    ///
    /// # Example
    /// ```
    /// use stochastic_core_rs::Mwc256;
    ///
    /// let mut rng = Mwc256::with_seed(12345);
    /// let p = rng.next_f64();
    /// assert!(p > 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        loop {
            let hi = self.next_u32();
            let lo = self.next_u32();
            let r = WORD_SCALE * (WORD_SCALE * f64::from(lo) + f64::from(hi))
                + OPEN_INTERVAL_OFFSET;
            if r <= OPEN_INTERVAL_MAX {
                return r;
            }
        }
    }

    /// Generate a random boolean
    ///
    /// One underlying word is amortized over 32 booleans: bits are consumed
    /// from a buffered word, low bit first.
    pub fn next_bool(&mut self) -> bool {
        if self.bit_budget == 0 {
            self.bit_reservoir = self.next_u32();
            // 31, not 32: the first bit is consumed immediately below.
            self.bit_budget = 31;
        } else {
            self.bit_budget -= 1;
        }
        let bit = self.bit_reservoir & 1;
        self.bit_reservoir >>= 1;
        bit != 0
    }

    /// Generate a random byte
    ///
    /// One underlying word is amortized over 4 bytes, consumed from the
    /// most significant byte down.
    pub fn next_byte(&mut self) -> u8 {
        if self.byte_budget == 0 {
            self.byte_reservoir = self.next_u32();
            self.byte_budget = 3;
        } else {
            self.byte_budget -= 1;
        }
        (self.byte_reservoir >> (8 * self.byte_budget)) as u8
    }

    /// Generate a random value in the half-open range [begin, end)
    ///
    /// Uniformity is guaranteed by rejection sampling: 64-bit draws falling
    /// into the biased tail above the largest multiple of the range length
    /// are discarded and redrawn.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidRange`] if `begin >= end`; no draw is
    /// consumed and the generator state is left untouched.
    ///
    /// # Example
    /// ```
    /// use stochastic_core_rs::Mwc256;
    ///
    /// let mut rng = Mwc256::with_seed(12345);
    /// let amount = rng.int_range(-50, 50).unwrap();
    /// assert!(amount >= -50 && amount < 50);
    /// ```
    pub fn int_range(&mut self, begin: i64, end: i64) -> Result<i64, RngError> {
        if begin >= end {
            return Err(RngError::InvalidRange { begin, end });
        }

        // Wrapping arithmetic: the length of e.g. [i64::MIN, i64::MAX) only
        // fits in a u64.
        let len = end.wrapping_sub(begin) as u64;
        let max = (u64::MAX / len) * len;

        let mut x = self.next_u64();
        while x >= max {
            x = self.next_u64();
        }

        Ok(begin.wrapping_add((x % len) as i64))
    }

    /// All-zero state; only meaningful as input to `seed_in_place`.
    pub(crate) fn zeroed() -> Self {
        Self {
            table: [0; TABLE_SIZE],
            index: 0,
            carry: 0,
            bit_budget: 0,
            bit_reservoir: 0,
            byte_budget: 0,
            byte_reservoir: 0,
        }
    }

    /// Seed the full state from a non-empty word array.
    ///
    /// Callers validate non-emptiness; with an empty slice the table would
    /// stay all-zero through the XOR fold, which the avalanche pass does
    /// not fully compensate for.
    pub(crate) fn seed_in_place(&mut self, words: &[u64]) {
        debug_assert!(!words.is_empty());

        self.table = [0; TABLE_SIZE];
        for (i, word) in words.iter().enumerate() {
            self.table[(2 * i) % TABLE_SIZE] ^= *word as u32;
            self.table[(2 * i + 1) % TABLE_SIZE] ^= (*word >> 32) as u32;
        }

        // Avalanche pass: spread every seed bit over the whole table so
        // that small integer seeds still yield well-mixed state.
        for i in 1..TABLE_SIZE {
            let prev = self.table[i - 1];
            self.table[i] ^= SEED_MIX_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        self.carry = self.table[TABLE_SIZE - 1] % INITIAL_CARRY_MODULUS;
        self.index = (TABLE_SIZE - 1) as u8;
        self.bit_budget = 0;
        self.bit_reservoir = 0;
        self.byte_budget = 0;
        self.byte_reservoir = 0;
    }
}

/// Serde adapter for the lag table: serde's derived array support stops at
/// 32 elements for deserialization, so the table travels as a sequence with
/// an explicit length check.
mod lag_table {
    use super::TABLE_SIZE;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(table: &[u32; TABLE_SIZE], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        table.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u32; TABLE_SIZE], D::Error>
    where
        D: Deserializer<'de>,
    {
        let words = Vec::<u32>::deserialize(deserializer)?;
        let len = words.len();
        words
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"a lag table of 256 words"))
    }
}
