//! Funnels: how a value decomposes into put-calls.

use crate::errors::PutError;
use crate::primitive::PrimitiveSink;

/// Describes how to decompose a `T` into primitive put-calls.
///
/// A funnel must be deterministic: equal values produce equal byte streams.
pub trait Funnel<T: ?Sized> {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &T, into: &mut S) -> Result<(), PutError>;
}

impl<T: ?Sized, F: Funnel<T> + ?Sized> Funnel<T> for &F {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &T, into: &mut S) -> Result<(), PutError> {
        (**self).funnel(from, into)
    }
}

/// Raw bytes, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesFunnel;

impl Funnel<[u8]> for BytesFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &[u8], into: &mut S) -> Result<(), PutError> {
        into.put_bytes(from);
        Ok(())
    }
}

/// UTF-8 bytes of a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Funnel;

impl Funnel<str> for Utf8Funnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &str, into: &mut S) -> Result<(), PutError> {
        into.put_str(from);
        Ok(())
    }
}

/// UTF-16 code units of a string, two bytes each.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnencodedCharsFunnel;

impl Funnel<str> for UnencodedCharsFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &str, into: &mut S) -> Result<(), PutError> {
        into.put_unencoded_chars(from);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerFunnel;

impl Funnel<i32> for IntegerFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &i32, into: &mut S) -> Result<(), PutError> {
        into.put_int(*from);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LongFunnel;

impl Funnel<i64> for LongFunnel {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &i64, into: &mut S) -> Result<(), PutError> {
        into.put_long(*from);
        Ok(())
    }
}

/// Funnels each element of a slice in order with the element funnel.
///
/// No length or separator is written, so `[[1], [2]]` and `[[1, 2]]` collide
/// when the element funnel is itself unframed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialFunnel<F>(pub F);

impl<T, F: Funnel<T>> Funnel<[T]> for SequentialFunnel<F> {
    fn funnel<S: PrimitiveSink + ?Sized>(&self, from: &[T], into: &mut S) -> Result<(), PutError> {
        for item in from {
            self.0.funnel(item, into)?;
        }
        Ok(())
    }
}
