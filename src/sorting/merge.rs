// Merge cursors are bounded by the half lengths and the merged range
#![allow(clippy::indexing_slicing)]

use crate::engine::Step;
use crate::io::configuration::{COMPARE_DELAY_MS, PLACEMENT_DELAY_MS, SETTLE_DELAY_MS};
use crate::sorting::SortRun;

/// Pending work on an inclusive range `[left, right]`
enum Task {
    Split { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

/// Post-order traversal without recursion: a split pushes its merge first
/// and its halves after, right below left, so the stack replays the call
/// order of the recursive formulation.
pub(crate) fn sort(run: &mut SortRun<'_, '_>, values: &mut [u32]) -> Step {
    let Some(last) = values.len().checked_sub(1) else {
        return Ok(());
    };
    let mut pending = vec![Task::Split {
        left: 0,
        right: last,
    }];

    while let Some(task) = pending.pop() {
        run.check()?;

        match task {
            Task::Split { left, right } if left < right => {
                let mid = left + (right - left) / 2;
                pending.push(Task::Merge { left, mid, right });
                pending.push(Task::Split {
                    left: mid + 1,
                    right,
                });
                pending.push(Task::Split { left, right: mid });
            }
            Task::Split { .. } => {}
            Task::Merge { left, mid, right } => merge(run, values, left, mid, right)?,
        }
    }

    Ok(())
}

fn merge(
    run: &mut SortRun<'_, '_>,
    values: &mut [u32],
    left: usize,
    mid: usize,
    right: usize,
) -> Step {
    let lower = values[left..=mid].to_vec();
    let upper = values[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lower.len() && j < upper.len() {
        run.check()?;
        run.show(values)?;
        run.pause(COMPARE_DELAY_MS)?;

        if lower[i] <= upper[j] {
            values[k] = lower[i];
            i += 1;
        } else {
            values[k] = upper[j];
            j += 1;
        }
        place(run, values, k)?;
        k += 1;
    }

    for &value in lower[i..].iter().chain(&upper[j..]) {
        run.check()?;
        values[k] = value;
        place(run, values, k)?;
        k += 1;
    }

    for index in left..=right {
        run.settle(index, values)?;
    }
    run.pause(SETTLE_DELAY_MS)
}

fn place(run: &mut SortRun<'_, '_>, values: &[u32], index: usize) -> Step {
    run.tone(values[index]);
    run.show(values)?;
    run.pause(PLACEMENT_DELAY_MS)
}
