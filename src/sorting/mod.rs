/// Bubble sort with a shrinking unsorted suffix
pub mod bubble;
/// Top-down heap sort with sift-down heapify
pub mod heap;
/// Insertion sort locating slots by binary search
pub mod insertion;
/// Top-down merge sort driven by an explicit task stack
pub mod merge;
/// Lomuto-partition quick sort driven by an explicit range stack
pub mod quick;
/// Least-significant-digit radix sort
pub mod radix;
/// Selection sort
pub mod selection;
/// Shell sort with halving gaps
pub mod shell;

use crate::engine::notify::SortNotifier;
use crate::engine::settled::SettledSet;
use crate::engine::{Halt, RunStatus, Step, StepControl};
use crate::io::error::Result;
use std::fmt;
use std::time::{Duration, Instant};

/// The stepped sort algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SortAlgorithm {
    /// Adjacent swaps, largest value bubbles to the end each pass
    Bubble,
    /// Minimum of the unsorted suffix swapped into place
    Selection,
    /// Binary search for the slot, then shift
    Insertion,
    /// Partition around the last element
    Quick,
    /// Merge sorted halves through scratch buffers
    Merge,
    /// Max-heap extraction
    Heap,
    /// Gapped insertion sort
    Shell,
    /// Counting sort per decimal digit
    Radix,
}

impl SortAlgorithm {
    /// Every sort algorithm in menu order
    pub const ALL: [Self; 8] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Heap,
        Self::Merge,
        Self::Shell,
        Self::Radix,
    ];

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble sort",
            Self::Selection => "selection sort",
            Self::Insertion => "binary insertion sort",
            Self::Quick => "quick sort",
            Self::Merge => "merge sort",
            Self::Heap => "heap sort",
            Self::Shell => "shell sort",
            Self::Radix => "radix sort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    /// Which algorithm ran
    pub algorithm: SortAlgorithm,
    /// Whether the run completed or was stopped
    pub status: RunStatus,
    /// Sequence left on display: sorted, or the input when cancelled
    pub values: Vec<u32>,
    /// Settled positions at the end of the run
    pub settled: SettledSet,
    /// Notifications delivered to the sink
    pub notifications: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl SortReport {
    /// Test whether the run finished without being stopped
    pub fn completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Per-run state threaded through an algorithm
///
/// Owns the settled set and forwards every visible step to the sink.
pub(crate) struct SortRun<'r, 'c> {
    control: &'r mut StepControl<'c>,
    notifier: &'r mut dyn SortNotifier,
    settled: SettledSet,
    hidden: SettledSet,
    notifications: usize,
}

impl<'r, 'c> SortRun<'r, 'c> {
    fn new(
        control: &'r mut StepControl<'c>,
        notifier: &'r mut dyn SortNotifier,
        len: usize,
    ) -> Self {
        Self {
            control,
            notifier,
            settled: SettledSet::new(len),
            hidden: SettledSet::new(len),
            notifications: 0,
        }
    }

    /// Poll for a stop request
    pub(crate) fn check(&self) -> Step {
        self.control.check()
    }

    /// Wait out a step and poll for a stop request
    pub(crate) fn pause(&mut self, nominal_ms: u32) -> Step {
        self.control.pause(nominal_ms)
    }

    /// Sound the tone for a value
    pub(crate) fn tone(&mut self, value: u32) {
        self.control.tone(value);
    }

    /// Deliver the current snapshot to the sink
    pub(crate) fn show(&mut self, values: &[u32]) -> Step {
        Ok(self.emit(values)?)
    }

    fn emit(&mut self, values: &[u32]) -> Result<()> {
        let settled = if self.control.options().highlight_sorted {
            &self.settled
        } else {
            &self.hidden
        };
        self.notifier.notify(values, settled)?;
        self.notifications += 1;
        Ok(())
    }

    /// Mark a position final, notifying only if it was not already
    pub(crate) fn settle(&mut self, index: usize, values: &[u32]) -> Step {
        if self.settled.insert(index) {
            self.show(values)?;
        }
        Ok(())
    }

    /// Mark every position final and show the result
    fn finish(&mut self, values: &[u32]) -> Step {
        self.settled.fill();
        self.show(values)
    }

    /// Put the pre-run sequence back on display with nothing settled
    fn restore(&mut self, original: &[u32]) -> Result<()> {
        self.settled.clear();
        self.emit(original)
    }
}

/// Run a sort algorithm over a private copy of `input`
///
/// The input is never mutated. On a stop request the pre-run sequence is
/// shown again with an empty settled set and the report carries
/// [`RunStatus::Cancelled`].
///
/// # Errors
///
/// Returns the sink's error if a notification fails; the pre-run sequence
/// is restored on the sink first when possible
pub fn run_sort(
    algorithm: SortAlgorithm,
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    let started = Instant::now();
    log::debug!("starting {algorithm} on {} values", input.len());

    let mut values = input.to_vec();
    let mut run = SortRun::new(control, notifier, values.len());

    let outcome = run_algorithm(algorithm, &mut run, &mut values)
        .and_then(|()| run.finish(&values));

    let status = match outcome {
        Ok(()) => RunStatus::Completed,
        Err(Halt::Cancelled) => {
            run.restore(input)
                .map_err(|err| err.during(algorithm.name()))?;
            values.copy_from_slice(input);
            RunStatus::Cancelled
        }
        Err(Halt::Failed(err)) => {
            if let Err(restore_err) = run.restore(input) {
                log::warn!("could not restore display after {algorithm} failed: {restore_err}");
            }
            return Err(err.during(algorithm.name()));
        }
    };

    let report = SortReport {
        algorithm,
        status,
        values,
        settled: run.settled.clone(),
        notifications: run.notifications,
        elapsed: started.elapsed(),
    };
    log::info!(
        "{algorithm} {:?} after {} notifications in {:.2?}",
        report.status,
        report.notifications,
        report.elapsed
    );
    Ok(report)
}

fn run_algorithm(
    algorithm: SortAlgorithm,
    run: &mut SortRun<'_, '_>,
    values: &mut [u32],
) -> Step {
    match algorithm {
        SortAlgorithm::Bubble => bubble::sort(run, values),
        SortAlgorithm::Selection => selection::sort(run, values),
        SortAlgorithm::Insertion => insertion::sort(run, values),
        SortAlgorithm::Quick => quick::sort(run, values),
        SortAlgorithm::Merge => merge::sort(run, values),
        SortAlgorithm::Heap => heap::sort(run, values),
        SortAlgorithm::Shell => shell::sort(run, values),
        SortAlgorithm::Radix => radix::sort(run, values),
    }
}

/// Animate bubble sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn bubble_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Bubble, input, notifier, control)
}

/// Animate selection sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn selection_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Selection, input, notifier, control)
}

/// Animate binary insertion sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn binary_insertion_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Insertion, input, notifier, control)
}

/// Animate quick sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn quick_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Quick, input, notifier, control)
}

/// Animate merge sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn merge_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Merge, input, notifier, control)
}

/// Animate heap sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn heap_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Heap, input, notifier, control)
}

/// Animate shell sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn shell_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Shell, input, notifier, control)
}

/// Animate radix sort
///
/// # Errors
///
/// See [`run_sort`]
pub fn radix_sort(
    input: &[u32],
    notifier: &mut dyn SortNotifier,
    control: &mut StepControl<'_>,
) -> Result<SortReport> {
    run_sort(SortAlgorithm::Radix, input, notifier, control)
}
