// Indices stay inside the sorted prefix plus the element being inserted
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS, SETTLE_DELAY_MS};
use crate::sorting::SortRun;
use std::cmp::Ordering;

/// Each insertion settles the slot its value landed in, although a later,
/// smaller value may still shift it right. Only the completion notification
/// is guaranteed to show final positions.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    for i in 1..values.len() {
        run.check()?;

        let current = values[i];
        let slot = locate(run, values, current, i)?;

        for k in (slot..i).rev() {
            run.check()?;

            values[k + 1] = values[k];
            run.tone(values[k]);
            run.show(values)?;
            run.pause(PLACEMENT_DELAY_MS)?;
        }

        values[slot] = current;
        run.tone(current);
        run.show(values)?;
        run.pause(PLACEMENT_DELAY_MS)?;

        run.settle(slot, values)?;
        run.pause(SETTLE_DELAY_MS)?;
    }

    Ok(())
}

/// Find the insertion slot for `item` within the sorted prefix `values[..len]`
///
/// Every visit of a midpoint is shown before the shift phase starts. Equal
/// values are placed after the existing run.
fn locate(
    run: &mut SortRun<'_, '_>,
    values: &[u32],
    item: u32,
    len: usize,
) -> Step<usize> {
    let mut low = 0;
    let mut high = len;

    loop {
        if high <= low {
            return Ok(low);
        }
        if high == low + 1 {
            return Ok(if item > values[low] { low + 1 } else { low });
        }

        let mid = (low + high - 1) / 2;
        run.check()?;
        run.show(values)?;
        run.pause(COMPARE_DELAY_MS)?;

        match item.cmp(&values[mid]) {
            Ordering::Equal => return Ok(mid + 1),
            Ordering::Greater => low = mid + 1,
            Ordering::Less => high = mid,
        }
    }
}
