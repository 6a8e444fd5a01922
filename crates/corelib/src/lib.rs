//! Core library: byte-sink adapter, funnels, hashing sinks and config.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub mod adapter;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod funnel;
pub mod primitive;
pub mod sink;

pub use adapter::ByteSinkAdapter;
pub use errors::{ConfigError, PutError};
pub use funnel::Funnel;
pub use primitive::PrimitiveSink;
pub use sink::ByteSink;

/// Public hash info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashInfo {
    pub id: &'static str,
    pub digest_len: usize,
}

static HASHES: Lazy<Vec<HashInfo>> = Lazy::new(|| {
    crypto::registry::SUPPORTED_IDS
        .iter()
        .map(|&id| HashInfo { id, digest_len: 32 })
        .collect()
});

/// API: list available hashes
pub fn list_hashes() -> &'static [HashInfo] {
    HASHES.as_slice()
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
