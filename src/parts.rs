//! Chunk-splitting collaborator.
//!
//! Partitions an ordered sequence into contiguous, order-preserving chunks.
//! The functions here know nothing about bit vectors; [`BitVector`] reorders
//! its bits at its own boundary before and after delegating to [`parts`].
//!
//! [`BitVector`]: crate::BitVector

use crate::Error;

/// How a sequence is partitioned into chunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitSpec {
    /// Equal chunks of the given length; the last chunk may be shorter.
    FixedSize(usize),
    /// Explicit chunk lengths, consumed in order. Lengths summing to less
    /// than the input length leave a trailing remainder chunk; summing to
    /// more is an error.
    ExplicitSizes(Vec<usize>),
}

impl From<usize> for SplitSpec {
    #[inline]
    fn from(length: usize) -> Self {
        SplitSpec::FixedSize(length)
    }
}

/// Partitions `items` into chunks per `spec`.
///
/// Concatenating the returned chunks in order always reproduces `items`.
///
/// # Example
///
/// ```
/// use bitseq::{parts, SplitSpec};
///
/// let chunks = parts(&[1, 2, 3, 4, 5], &SplitSpec::FixedSize(2)).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn parts<T: Clone>(items: &[T], spec: &SplitSpec) -> Result<Vec<Vec<T>>, Error> {
    match spec {
        SplitSpec::FixedSize(0) => Err(Error::InvalidArgument(
            "chunk length must be positive".into(),
        )),
        SplitSpec::FixedSize(length) => Ok(items.chunks(*length).map(<[T]>::to_vec).collect()),
        SplitSpec::ExplicitSizes(sizes) => {
            let total: usize = sizes.iter().sum();
            if total > items.len() {
                return Err(Error::InvalidArgument(format!(
                    "chunk lengths sum to {total} but only {} items are available",
                    items.len()
                )));
            }

            let mut chunks = Vec::with_capacity(sizes.len() + 1);
            let mut rest = items;
            for &size in sizes {
                let (chunk, tail) = rest.split_at(size);
                chunks.push(chunk.to_vec());
                rest = tail;
            }
            if !rest.is_empty() {
                chunks.push(rest.to_vec());
            }
            Ok(chunks)
        }
    }
}
