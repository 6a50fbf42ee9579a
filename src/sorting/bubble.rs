// Indices stay below the shrinking unsorted bound
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::BUBBLE_STEP_DELAY_MS;
use crate::sorting::SortRun;

/// Each pass carries the largest unsorted value to the end of the prefix,
/// so after pass `i` the last `i + 1` positions are final.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let n = values.len();

    for pass in 0..n.saturating_sub(1) {
        run.check()?;

        for j in 0..n - pass - 1 {
            run.check()?;

            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                run.tone(values[j]);
                run.show(values)?;
                run.pause(BUBBLE_STEP_DELAY_MS)?;
            }
        }

        run.settle(n - 1 - pass, values)?;
        run.pause(BUBBLE_STEP_DELAY_MS)?;
    }

    Ok(())
}
