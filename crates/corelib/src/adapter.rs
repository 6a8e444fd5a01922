//! Adapter that turns typed put-calls into ordered bytes for a [`ByteSink`].
//!
//! Multi-byte primitives are staged little-endian in an 8-byte scratch
//! buffer owned by the adapter, then forwarded as one range. The scratch is
//! cleared when the staging guard drops, so it holds nothing between calls
//! even if the sink unwinds.

use std::io;

use crate::errors::PutError;
use crate::primitive::PrimitiveSink;
use crate::sink::ByteSink;

/// Size of the widest primitive staged through the scratch buffer.
pub const SCRATCH_LEN: usize = 8;

/// Feeds bytes and little-endian primitives into a [`ByteSink`].
///
/// One adapter serves one hashing session. All puts take `&mut self`, so an
/// adapter is never driven from two places at once.
#[derive(Debug)]
pub struct ByteSinkAdapter<S> {
    sink: S,
    scratch: [u8; SCRATCH_LEN],
}

/// Holds the staged bytes; zeroes the whole scratch buffer on drop.
struct Staged<'a> {
    buf: &'a mut [u8; SCRATCH_LEN],
    len: usize,
}

impl<'a> Staged<'a> {
    fn new(buf: &'a mut [u8; SCRATCH_LEN], bytes: &[u8]) -> Self {
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len(),
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Drop for Staged<'_> {
    fn drop(&mut self) {
        self.buf.fill(0);
    }
}

impl<S: ByteSink> ByteSinkAdapter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            scratch: [0u8; SCRATCH_LEN],
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the sink, e.g. to finalize a digest.
    pub fn into_inner(self) -> S {
        self.sink
    }

    fn put_staged(&mut self, bytes: &[u8]) -> &mut Self {
        let staged = Staged::new(&mut self.scratch, bytes);
        self.sink.accept_range(staged.as_slice());
        drop(staged);
        self
    }

    #[cfg(test)]
    fn scratch(&self) -> &[u8; SCRATCH_LEN] {
        &self.scratch
    }
}

impl<S: ByteSink> PrimitiveSink for ByteSinkAdapter<S> {
    fn put_byte(&mut self, b: u8) -> &mut Self {
        self.sink.accept_byte(b);
        self
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.sink.accept_range(bytes);
        self
    }

    fn put_bytes_range(
        &mut self,
        bytes: &[u8],
        off: usize,
        len: usize,
    ) -> Result<&mut Self, PutError> {
        let size = bytes.len();
        match off.checked_add(len) {
            Some(end) if end <= size => {
                self.sink.accept_range(&bytes[off..end]);
                Ok(self)
            }
            _ => {
                log::debug!("rejected range put: off={off} len={len} size={size}");
                Err(PutError::IndexOutOfRange { off, len, size })
            }
        }
    }

    fn put_short(&mut self, s: i16) -> &mut Self {
        self.put_staged(&s.to_le_bytes())
    }

    fn put_int(&mut self, i: i32) -> &mut Self {
        self.put_staged(&i.to_le_bytes())
    }

    fn put_long(&mut self, l: i64) -> &mut Self {
        self.put_staged(&l.to_le_bytes())
    }

    fn put_char_unit(&mut self, unit: u16) -> &mut Self {
        self.put_staged(&unit.to_le_bytes())
    }
}

impl<S: ByteSink> io::Write for ByteSinkAdapter<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
