//! Row-sharded iteration over an output buffer.
//!
//! Every engine computes each output pixel from read-only input, so rows can
//! be processed independently. With the `parallel` feature enabled rows are
//! distributed over the rayon thread pool; otherwise they run in order. The
//! result is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Call `f(y, row)` for every row of `data`, where each row is `row_len` bytes.
pub(crate) fn for_each_row<F>(data: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    data.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    data.chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
