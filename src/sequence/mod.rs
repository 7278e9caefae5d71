//! Deterministic pseudo-random sequences derived from a seed string.
//!
//! The sequence is a hash chain: no RNG state is involved, so the same seed
//! always expands to the same bytes on every platform.

mod hash_chain;

pub use hash_chain::{md5_hex, SeedSequence};
