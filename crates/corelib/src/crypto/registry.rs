//! String-id -> hasher mapping and convenience helpers.

use crate::crypto::blake3::Blake3;
use crate::crypto::hash::{hash_labeled, Hash32};
use crate::crypto::keccak::Keccak256;
use crate::sink::ByteSink;

/// Ids accepted by [`AnyHasher::by_id`], in canonical form.
pub const SUPPORTED_IDS: [&str; 2] = ["blake3", "keccak256"];

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// A hasher chosen at runtime.
pub enum AnyHasher {
    Blake3(Blake3),
    Keccak256(Keccak256),
}

impl AnyHasher {
    /// Fresh hasher for `id` (case-insensitive, surrounding whitespace ignored).
    pub fn by_id(id: &str) -> Option<Self> {
        match normalize(id).as_str() {
            "blake3" => Some(Self::Blake3(Blake3::new())),
            "keccak256" => Some(Self::Keccak256(Keccak256::new())),
            other => {
                log::debug!("no hasher registered for id '{other}'");
                None
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Blake3(_) => "blake3",
            Self::Keccak256(_) => "keccak256",
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Blake3(h) => h.update(data),
            Self::Keccak256(h) => h.update(data),
        }
    }

    pub fn finalize(self) -> [u8; 32] {
        match self {
            Self::Blake3(h) => h.finalize(),
            Self::Keccak256(h) => h.finalize(),
        }
    }
}

impl ByteSink for AnyHasher {
    fn accept_byte(&mut self, b: u8) {
        match self {
            Self::Blake3(h) => h.accept_byte(b),
            Self::Keccak256(h) => h.accept_byte(b),
        }
    }

    fn accept_range(&mut self, bytes: &[u8]) {
        match self {
            Self::Blake3(h) => h.accept_range(bytes),
            Self::Keccak256(h) => h.accept_range(bytes),
        }
    }
}

/// Return H(label || data) for the given hash id.
pub fn hash32_by_id(id: &str, label: &str, data: &[u8]) -> Option<[u8; 32]> {
    match normalize(id).as_str() {
        "blake3" => Some(hash_labeled::<Blake3>(label, data)),
        "keccak256" => Some(hash_labeled::<Keccak256>(label, data)),
        _ => None,
    }
}

/// Convenience helper deriving a u64 from the first 8 bytes (little-endian).
pub fn hash64_by_id(id: &str, label: &str, data: &[u8]) -> Option<u64> {
    hash32_by_id(id, label, data).map(|digest| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[0..8]);
        u64::from_le_bytes(bytes)
    })
}
