//! Deterministic random number generation
//!
//! Uses a lag-256 multiply-with-carry generator for fast, reproducible
//! random number generation. CRITICAL: all randomness in the host
//! application's numerical routines MUST go through this module.

mod entropy;
mod mwc256;
mod sampling;

pub use mwc256::{Mwc256, RngError};
