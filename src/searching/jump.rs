// Block ends are clamped to the sequence length before indexing
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::SEARCH_VISIT_DELAY_MS;
use crate::searching::SearchRun;

/// Block size for a sequence of `len` values
pub const fn block_size(len: usize) -> usize {
    len.isqrt()
}

/// Block scan highlights `[block_start, block_end]`, then the linear scan
/// highlights `[index]` one position at a time.
///
/// The block boundary advances additively by the initial block size rather
/// than being recomputed from the remaining length.
pub(crate) fn search(
    run: &mut SearchRun<'_, '_>,
    sorted: &[u32],
    target: u32,
) -> Step<Option<usize>> {
    let n = sorted.len();
    if n == 0 {
        return Ok(None);
    }

    let block = block_size(n);
    let mut step = block;
    let mut prev = 0;

    loop {
        run.check()?;

        let block_end = step.min(n) - 1;
        if sorted[block_end] >= target {
            break;
        }

        run.show(&[prev, block_end])?;
        run.visit(sorted[prev], SEARCH_VISIT_DELAY_MS)?;

        prev = step;
        step += block;
        if prev >= n {
            return Ok(None);
        }
    }

    loop {
        run.check()?;

        if sorted[prev] >= target {
            break;
        }

        run.show(&[prev])?;
        run.visit(sorted[prev], SEARCH_VISIT_DELAY_MS)?;

        prev += 1;
        if prev == step.min(n) {
            return Ok(None);
        }
    }

    Ok((sorted[prev] == target).then_some(prev))
}
