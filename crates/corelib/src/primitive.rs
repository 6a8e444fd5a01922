//! The put-surface funnels write against.

use crate::errors::PutError;
use crate::funnel::Funnel;

/// Accepts bytes and fixed-width primitives, serialized little-endian.
///
/// Every call returns the sink so calls can be chained. Only operations that
/// take a caller-supplied range or an optional argument can fail, and they
/// fail before anything is forwarded.
pub trait PrimitiveSink {
    fn put_byte(&mut self, b: u8) -> &mut Self;

    /// All of `bytes`, in order.
    fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self;

    /// `len` bytes of `bytes` starting at `off`.
    fn put_bytes_range(&mut self, bytes: &[u8], off: usize, len: usize)
        -> Result<&mut Self, PutError>;

    fn put_short(&mut self, s: i16) -> &mut Self;

    fn put_int(&mut self, i: i32) -> &mut Self;

    fn put_long(&mut self, l: i64) -> &mut Self;

    /// One raw UTF-16 code unit, 2 bytes.
    fn put_char_unit(&mut self, unit: u16) -> &mut Self;

    /// `c` as UTF-16 code units, each written like
    /// [`put_char_unit`](PrimitiveSink::put_char_unit).
    ///
    /// A BMP char forwards 2 bytes. A supplementary char (above `U+FFFF`)
    /// forwards 4 bytes: its surrogate pair, high unit first, in two separate
    /// 2-byte puts. Use `put_char_unit` when exactly 2 bytes are required.
    fn put_char(&mut self, c: char) -> &mut Self {
        let mut units = [0u16; 2];
        for &unit in c.encode_utf16(&mut units).iter() {
            self.put_char_unit(unit);
        }
        self
    }

    /// Rejects an absent byte sequence with [`PutError::InvalidArgument`].
    fn put_maybe_bytes(&mut self, bytes: Option<&[u8]>) -> Result<&mut Self, PutError> {
        match bytes {
            Some(bytes) => Ok(self.put_bytes(bytes)),
            None => {
                log::debug!("rejected put of absent byte sequence");
                Err(PutError::InvalidArgument("bytes must be present"))
            }
        }
    }

    fn put_bool(&mut self, b: bool) -> &mut Self {
        self.put_byte(if b { 1 } else { 0 })
    }

    /// IEEE-754 bits, as [`put_int`](PrimitiveSink::put_int).
    fn put_f32(&mut self, f: f32) -> &mut Self {
        self.put_int(f.to_bits() as i32)
    }

    /// IEEE-754 bits, as [`put_long`](PrimitiveSink::put_long).
    fn put_f64(&mut self, d: f64) -> &mut Self {
        self.put_long(d.to_bits() as i64)
    }

    /// Every UTF-16 code unit of `s`, with no length prefix or terminator.
    fn put_unencoded_chars(&mut self, s: &str) -> &mut Self {
        for unit in s.encode_utf16() {
            self.put_char_unit(unit);
        }
        self
    }

    /// The UTF-8 bytes of `s`.
    fn put_str(&mut self, s: &str) -> &mut Self {
        self.put_bytes(s.as_bytes())
    }

    /// Let `funnel` decompose `instance` into put-calls against this sink.
    fn put_object<T, F>(&mut self, instance: &T, funnel: &F) -> Result<&mut Self, PutError>
    where
        T: ?Sized,
        F: Funnel<T> + ?Sized,
    {
        log::trace!("funneling {}", std::any::type_name::<T>());
        funnel.funnel(instance, self)?;
        Ok(self)
    }
}
