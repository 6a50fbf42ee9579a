// Partition indices stay inside the popped range
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS};
use crate::sorting::SortRun;
use std::ops::Range;

/// Ranges are popped depth-first with the left part on top, so the left
/// subtree finishes animating before the right one starts.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let mut pending: Vec<Range<usize>> = Vec::from([0..values.len()]);

    while let Some(range) = pending.pop() {
        match range.len() {
            0 => {}
            1 => run.settle(range.start, values)?,
            _ => {
                run.check()?;
                let pivot = partition(run, values, range.clone())?;
                run.settle(pivot, values)?;

                pending.push(pivot + 1..range.end);
                pending.push(range.start..pivot);
            }
        }
    }

    Ok(())
}

/// Lomuto partition around the last element of `range`
///
/// Returns the final position of the pivot.
fn partition(
    run: &mut SortRun<'_, '_>,
    values: &mut [u32],
    range: Range<usize>,
) -> Step<usize> {
    let last = range.end - 1;
    let pivot = values[last];
    let mut store = range.start;

    for j in range.start..last {
        run.check()?;
        run.show(values)?;
        run.pause(COMPARE_DELAY_MS)?;

        if values[j] <= pivot {
            values.swap(store, j);
            run.tone(values[store]);
            run.show(values)?;
            run.pause(PLACEMENT_DELAY_MS)?;
            store += 1;
        }
    }

    values.swap(store, last);
    run.tone(values[store]);
    run.show(values)?;
    run.pause(PLACEMENT_DELAY_MS)?;

    Ok(store)
}
