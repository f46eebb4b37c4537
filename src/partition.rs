//! Contiguous chunk partitioning.

use std::ops::Range;

use crate::error::{Error, Result};

/// Split the index range `[0, len)` into contiguous, non-overlapping chunks
/// for `worker_count` workers, in ascending order.
///
/// With at least as many workers as items, every chunk holds exactly one
/// element and the extra workers go unused. Otherwise the chunk size is
/// `len / worker_count` and the final chunk absorbs the division remainder,
/// so the last chunk may be larger than the rest, a deliberate
/// simplicity-over-balance tradeoff that callers must be able to rely on.
pub fn partition(worker_count: usize, len: usize) -> Result<Vec<Range<usize>>> {
    if worker_count == 0 {
        return Err(Error::InvalidWorkerCount);
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    if worker_count >= len {
        return Ok((0..len).map(|i| i..i + 1).collect());
    }

    let chunk_size = len / worker_count;
    let mut chunks = Vec::with_capacity(worker_count);
    let mut lo = 0;
    for _ in 0..worker_count - 1 {
        chunks.push(lo..lo + chunk_size);
        lo += chunk_size;
    }
    // The last chunk runs to the end of the sequence.
    chunks.push(lo..len);

    tracing::trace!(
        "split {} items into {} chunks of base size {}",
        len,
        chunks.len(),
        chunk_size
    );
    Ok(chunks)
}
