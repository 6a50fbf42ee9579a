// Child indices are checked against the heap size before use
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::PLACEMENT_DELAY_MS;
use crate::sorting::SortRun;

pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let n = values.len();

    for root in (0..n / 2).rev() {
        run.check()?;
        sift_down(run, values, n, root)?;
    }

    for end in (1..n).rev() {
        run.check()?;

        values.swap(0, end);
        run.tone(values[0]);
        run.show(values)?;
        run.pause(PLACEMENT_DELAY_MS)?;

        run.settle(end, values)?;
        sift_down(run, values, end, 0)?;
    }

    Ok(())
}

/// Restore the max-heap property below `root` within `values[..size]`
///
/// Each swap down the tree is a visible step.
fn sift_down(
    run: &mut SortRun<'_, '_>,
    values: &mut [u32],
    size: usize,
    root: usize,
) -> Step {
    let mut node = root;

    loop {
        run.check()?;

        let mut largest = node;
        let left = 2 * node + 1;
        let right = left + 1;

        if left < size && values[left] > values[largest] {
            largest = left;
        }
        if right < size && values[right] > values[largest] {
            largest = right;
        }
        if largest == node {
            return Ok(());
        }

        values.swap(node, largest);
        run.tone(values[node]);
        run.show(values)?;
        run.pause(PLACEMENT_DELAY_MS)?;
        node = largest;
    }
}
