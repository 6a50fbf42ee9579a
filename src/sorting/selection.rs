// Indices stay inside the unsorted suffix
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS, SETTLE_DELAY_MS};
use crate::sorting::SortRun;

pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        run.check()?;

        let mut min_index = i;
        for j in i + 1..n {
            run.check()?;

            // Comparison highlight
            run.show(values)?;
            run.pause(COMPARE_DELAY_MS)?;

            if values[j] < values[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            values.swap(i, min_index);
            run.tone(values[i]);
            run.show(values)?;
            run.pause(PLACEMENT_DELAY_MS)?;
        }

        run.settle(i, values)?;
        run.pause(SETTLE_DELAY_MS)?;
    }

    Ok(())
}
