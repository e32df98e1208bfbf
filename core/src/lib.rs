//! Stochastic Core - Deterministic Random Number Engine
//!
//! Bit-exact pseudorandom number generation for synthetic data generation,
//! Monte-Carlo sampling and test fixtures.
//!
//! # Architecture
//!
//! - **rng**: The multiply-with-carry generator, seeding, entropy sourcing
//!   and distribution samplers
//! - **checkpoint**: Snapshot/restore of exact generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence on every platform and every run
//! 2. A cloned generator is indistinguishable from the original
//! 3. Reseeding fully resets the stream (no bits leak from the old stream)

// Module declarations
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, RngSnapshot};
pub use rng::{Mwc256, RngError};
