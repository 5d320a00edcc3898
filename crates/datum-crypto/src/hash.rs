//! The hash-function and streaming-writer capabilities.
//!
//! A [`Writer`] accumulates input through repeated [`Writer::write`] calls
//! and produces a digest from [`Writer::finalize`]. `finalize` takes the
//! writer by value, so writing after finalizing does not compile.
//!
//! A [`HashFunction`] is a pure map from bytes to a digest. Every writer
//! that is also marked [`OneWay`] is a hash function, computed through
//! [`calculate`].
//!
//! Writers hold their state exclusively. Sharing one writer between threads
//! needs external synchronization; the usual approach is one writer per
//! thread or task.

use std::fmt;

use crate::digest::Digest;

mod private {
    pub trait Sealed {}
}

/// Output type of a writer: some `Digest<S>`.
pub trait DigestOutput: private::Sealed + Copy + Eq + Ord + fmt::Debug {
    /// Width in bytes.
    const SIZE: usize;
}

impl<const S: usize> private::Sealed for Digest<S> {}

impl<const S: usize> DigestOutput for Digest<S> {
    const SIZE: usize = S;
}

/// An incremental hash computation.
pub trait Writer: Default {
    type Output: DigestOutput;

    /// Width of the produced digest in bytes.
    const SIZE: usize = <Self::Output as DigestOutput>::SIZE;

    /// Feed more input.
    fn write(&mut self, bytes: &[u8]) -> &mut Self;

    /// Consume the accumulated state and produce the digest.
    fn finalize(self) -> Self::Output;
}

/// Marks a writer whose mapping is believed infeasible to invert.
///
/// This is a claim about the algorithm, checked by cryptanalysis rather
/// than by this code. Only implement it for audited algorithms.
pub trait OneWay {}

/// A one-shot hash function.
pub trait HashFunction {
    type Output: DigestOutput;

    /// Width of the produced digest in bytes.
    const SIZE: usize;

    fn hash(input: &[u8]) -> Self::Output;
}

impl<W: Writer + OneWay> HashFunction for W {
    type Output = W::Output;

    const SIZE: usize = <W::Output as DigestOutput>::SIZE;

    fn hash(input: &[u8]) -> W::Output {
        calculate::<W>(input)
    }
}

/// Hash `bytes` with a fresh writer: one write, then finalize.
pub fn calculate<W: Writer>(bytes: &[u8]) -> W::Output {
    let mut writer = W::default();
    writer.write(bytes);
    writer.finalize()
}
