//! Generic hash trait and helpers.

use crate::adapter::ByteSinkAdapter;
use crate::errors::PutError;
use crate::funnel::Funnel;
use crate::primitive::PrimitiveSink;
use crate::sink::ByteSink;

/// A streaming hash with fixed-size 32-byte digests.
pub trait Hash32 {
    /// Create a new hasher.
    fn new() -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce a 32-byte digest.
    fn finalize(self) -> [u8; 32];
}

/// Compute one-shot hash.
pub fn hash_one_shot<H: Hash32>(data: &[u8]) -> [u8; 32] {
    let mut h = H::new();
    h.update(data);
    h.finalize()
}

/// Domain-separated hashing: H(label || data)
pub fn hash_labeled<H: Hash32>(label: &str, data: &[u8]) -> [u8; 32] {
    let mut h = H::new();
    h.update(label.as_bytes());
    h.update(data);
    h.finalize()
}

/// Digest of `instance` as decomposed by `funnel`.
pub fn hash_object<H, T, F>(instance: &T, funnel: &F) -> Result<[u8; 32], PutError>
where
    H: Hash32 + ByteSink,
    T: ?Sized,
    F: Funnel<T>,
{
    let mut adapter = ByteSinkAdapter::new(H::new());
    adapter.put_object(instance, funnel)?;
    Ok(adapter.into_inner().finalize())
}
