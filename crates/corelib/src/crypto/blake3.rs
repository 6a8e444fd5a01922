//! BLAKE3 as a Hash32 and byte sink.

use crate::crypto::hash::Hash32;
use crate::sink::ByteSink;

pub struct Blake3 {
    inner: blake3::Hasher,
}

impl Hash32 for Blake3 {
    fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; 32] {
        *self.inner.finalize().as_bytes()
    }
}

impl ByteSink for Blake3 {
    fn accept_byte(&mut self, b: u8) {
        self.inner.update(&[b]);
    }

    fn accept_range(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }
}
