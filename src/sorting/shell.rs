// Gapped indices never drop below the current gap
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS, SETTLE_DELAY_MS};
use crate::sorting::SortRun;

/// Each gapped insertion settles the slot its value landed in, even though a
/// later pass with a smaller gap may still move that value. The highlight can
/// run ahead of the truth; the completion notification settles everything.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let n = values.len();
    let mut gap = n / 2;

    while gap > 0 {
        run.check()?;
        log::debug!("shell sort pass with gap {gap}");

        for i in gap..n {
            run.check()?;

            let held = values[i];
            run.show(values)?;
            run.pause(COMPARE_DELAY_MS)?;

            let mut j = i;
            while j >= gap && values[j - gap] > held {
                run.check()?;

                values[j] = values[j - gap];
                run.tone(values[j]);
                run.show(values)?;
                run.pause(PLACEMENT_DELAY_MS)?;
                j -= gap;
            }

            values[j] = held;
            run.tone(held);
            run.show(values)?;
            run.pause(PLACEMENT_DELAY_MS)?;

            run.settle(j, values)?;
            run.pause(SETTLE_DELAY_MS)?;
        }

        gap /= 2;
    }

    Ok(())
}
