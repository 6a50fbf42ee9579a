// Midpoints lie inside the live window
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::SEARCH_VISIT_DELAY_MS;
use crate::searching::SearchRun;
use std::cmp::Ordering;

/// Each visit highlights `[low, mid, high]` of the inclusive live window.
pub(crate) fn search(
    run: &mut SearchRun<'_, '_>,
    sorted: &[u32],
    target: u32,
) -> Step<Option<usize>> {
    let mut low = 0;
    // Exclusive bound; the highlighted high end is `end - 1`
    let mut end = sorted.len();

    while low < end {
        run.check()?;

        let high = end - 1;
        let mid = low + (high - low) / 2;
        run.show(&[low, mid, high])?;
        run.visit(sorted[mid], SEARCH_VISIT_DELAY_MS)?;

        match sorted[mid].cmp(&target) {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => end = mid,
        }
    }

    Ok(None)
}
