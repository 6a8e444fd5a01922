//! The byte-consuming capability every hashing primitive exposes.

/// Consumes bytes into an underlying hash computation.
///
/// Only [`accept_byte`](ByteSink::accept_byte) is required. Implementations
/// may override [`accept_range`](ByteSink::accept_range) for throughput, but
/// must observe the bytes in ascending index order, exactly as the default
/// does.
pub trait ByteSink {
    /// Consume exactly one byte.
    fn accept_byte(&mut self, b: u8);

    /// Consume every byte of `bytes`, lowest index first.
    #[inline]
    fn accept_range(&mut self, bytes: &[u8]) {
        forward_each(self, bytes);
    }
}

/// Feed `bytes` to `sink` one at a time, in ascending index order.
#[inline]
pub fn forward_each<S: ByteSink + ?Sized>(sink: &mut S, bytes: &[u8]) {
    for &b in bytes {
        sink.accept_byte(b);
    }
}

/// Records every byte it is fed.
impl ByteSink for Vec<u8> {
    #[inline]
    fn accept_byte(&mut self, b: u8) {
        self.push(b);
    }

    #[inline]
    fn accept_range(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn accept_byte(&mut self, b: u8) {
        (**self).accept_byte(b);
    }

    #[inline]
    fn accept_range(&mut self, bytes: &[u8]) {
        (**self).accept_range(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    #[inline]
    fn accept_byte(&mut self, b: u8) {
        (**self).accept_byte(b);
    }

    #[inline]
    fn accept_range(&mut self, bytes: &[u8]) {
        (**self).accept_range(bytes);
    }
}
