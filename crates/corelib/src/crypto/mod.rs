//! Concrete hashing sinks.
//! BLAKE3 and Keccak-256 behind a common 32-byte digest trait, plus an
//! id-based registry for callers that pick the hash at runtime.

pub mod blake3;
pub mod hash;
pub mod keccak;
pub mod registry;
