//! Default seeding from the operating system's entropy source
//!
//! Pulls one fixed-size block of OS entropy and turns it into a seed
//! array. When the entropy source is unavailable the generator still has
//! to come up, so a documented low-quality fallback assembles a seed from
//! wall-clock time and process identifiers instead.

use std::time::{SystemTime, UNIX_EPOCH};

use super::mwc256::Mwc256;

/// Seed words drawn from the entropy source in one read (32 bytes).
const ENTROPY_WORDS: usize = 4;

impl Mwc256 {
    /// Create a new generator seeded from the OS entropy source
    ///
    /// Reads a 32-byte block and seeds from it as four 64-bit words. If the
    /// read fails, falls back to a seed assembled from the current time,
    /// the process id and the parent process id. The fallback is
    /// deliberately low-entropy; it only guarantees that independently
    /// created generators are very unlikely to collide, not that seeds are
    /// unpredictable.
    ///
    /// Never fails: a working (if weaker) generator is always produced.
    pub fn from_os_entropy() -> Self {
        let words = read_entropy_words().unwrap_or_else(fallback_seed_words);
        let mut rng = Self::zeroed();
        rng.seed_in_place(&words);
        rng
    }
}

/// One block of OS entropy as seed words, or `None` on any failure.
fn read_entropy_words() -> Option<[u64; ENTROPY_WORDS]> {
    let mut buf = [0u8; ENTROPY_WORDS * 8];
    getrandom::getrandom(&mut buf).ok()?;

    let mut words = [0u64; ENTROPY_WORDS];
    for (word, chunk) in words.iter_mut().zip(buf.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(bytes);
    }
    Some(words)
}

/// Low-entropy fallback seed: wall-clock seconds, sub-second microseconds,
/// process id and parent process id (zero where the platform has none).
fn fallback_seed_words() -> [u64; ENTROPY_WORDS] {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    [
        now.as_secs(),
        u64::from(now.subsec_micros()),
        u64::from(std::process::id()),
        parent_process_id(),
    ]
}

#[cfg(unix)]
fn parent_process_id() -> u64 {
    u64::from(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn parent_process_id() -> u64 {
    0
}
