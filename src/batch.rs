use std::slice::Chunks;

use crate::{Error, Result};

/// Splits `items` into contiguous batches of `size`, preserving order.
/// The last batch may be shorter. Empty input yields no batches.
pub fn batches<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>> {
    if size == 0 {
        return Err(Error::ZeroBatchSize);
    }
    Ok(items.chunks(size))
}

/// Number of batches `batches` yields for `len` items.
pub fn batch_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}
