use std::fmt::Debug;

use crate::interfaces::Compress;

/// Folding of vector indices under a symmetry of the point set.
///
/// Implementations are stateless and selected at the type level by [`Storage`](super::Storage).
pub trait Compression: Debug + Clone + Copy + Default + Send + Sync + 'static {
    const TAG: Compress;

    /// Number of distinct representatives among `size` raw indices.
    fn size(size: u64) -> u64;

    /// Canonical representative of raw index `i` in `[0, size)`.
    fn compress_index(i: u64, size: u64) -> u64;
}

/// Every index is its own representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoCompression;

/// Indices `i` and `size - i` share a representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymmetricCompression;

impl Compression for NoCompression {
    const TAG: Compress = Compress::None;

    #[inline]
    fn size(size: u64) -> u64 {
        size
    }

    #[inline]
    fn compress_index(i: u64, _size: u64) -> u64 {
        i
    }
}

impl Compression for SymmetricCompression {
    const TAG: Compress = Compress::Symmetric;

    #[inline]
    fn size(size: u64) -> u64 {
        size / 2 + 1
    }

    // 0 and, for even sizes, size/2 are their own mirror images
    #[inline]
    fn compress_index(i: u64, size: u64) -> u64 {
        if i <= size / 2 { i } else { size - i }
    }
}
