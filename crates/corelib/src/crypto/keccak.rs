//! Keccak-256 (pre-NIST padding) as a Hash32 and byte sink.

use crate::crypto::hash::Hash32;
use crate::sink::ByteSink;
use tiny_keccak::{Hasher as TKHasher, Keccak};

pub struct Keccak256 {
    inner: Keccak,
}

impl Hash32 for Keccak256 {
    fn new() -> Self {
        Self {
            inner: Keccak::v256(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.inner.finalize(&mut out);
        out
    }
}

impl ByteSink for Keccak256 {
    fn accept_byte(&mut self, b: u8) {
        self.inner.update(&[b]);
    }

    fn accept_range(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }
}
