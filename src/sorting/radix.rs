// Digit buckets are 0..10 and output slots come from prefix counts
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS, SETTLE_DELAY_MS};
use crate::sorting::SortRun;

const RADIX: u64 = 10;

/// Stable counting sort per decimal digit, least significant first
///
/// Positions are marked settled as soon as the first pass writes them back,
/// before later digits could still move them. The final order is correct
/// regardless; only the highlight runs ahead of the truth.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let Some(max) = values.iter().copied().max().map(u64::from) else {
        return Ok(());
    };

    let mut exp: u64 = 1;

    while max / exp > 0 {
        run.check()?;
        log::debug!("radix sort pass for digit {exp}");

        let digit = |value: u32| (u64::from(value) / exp % RADIX) as usize;
        let mut output = vec![0; values.len()];
        let mut count = [0usize; RADIX as usize];

        for i in 0..values.len() {
            run.check()?;
            run.show(values)?;
            run.pause(COMPARE_DELAY_MS)?;

            count[digit(values[i])] += 1;
        }

        for bucket in 1..count.len() {
            count[bucket] += count[bucket - 1];
        }

        for i in (0..values.len()).rev() {
            run.check()?;

            let value = values[i];
            let bucket = digit(value);
            count[bucket] -= 1;
            output[count[bucket]] = value;

            run.tone(value);
            // Later reads only touch lower indices, so the slot can show output
            values[i] = output[i];
            run.show(values)?;
            run.pause(PLACEMENT_DELAY_MS)?;
        }

        for i in 0..values.len() {
            run.check()?;

            values[i] = output[i];
            run.settle(i, values)?;
            run.pause(SETTLE_DELAY_MS)?;
        }

        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}
