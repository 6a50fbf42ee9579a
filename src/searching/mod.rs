/// Halving search over the sorted copy
pub mod binary;
/// Block-skipping search over the sorted copy
pub mod jump;

use crate::engine::notify::SearchNotifier;
use crate::engine::{Halt, RunStatus, Step, StepControl};
use crate::io::error::Result;
use std::fmt;
use std::time::{Duration, Instant};

/// The stepped search algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SearchAlgorithm {
    /// Visit the middle of a shrinking window
    Binary,
    /// Skip ahead in square-root sized blocks, then scan linearly
    Jump,
}

impl SearchAlgorithm {
    /// Every search algorithm in menu order
    pub const ALL: [Self; 2] = [Self::Binary, Self::Jump];

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary search",
            Self::Jump => "jump search",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Which algorithm ran
    pub algorithm: SearchAlgorithm,
    /// Whether the run completed or was stopped
    pub status: RunStatus,
    /// Value searched for
    pub target: u32,
    /// Position of the target in `sorted`, if found
    pub index: Option<usize>,
    /// The ascending copy the search ran over
    pub sorted: Vec<u32>,
    /// Notifications delivered to the sink
    pub notifications: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl SearchReport {
    /// Position as the conventional signed result, `-1` when absent
    pub fn position(&self) -> i64 {
        self.index.map_or(-1, |index| index as i64)
    }
}

/// Per-run state threaded through a search
pub(crate) struct SearchRun<'r, 'c> {
    control: &'r mut StepControl<'c>,
    notifier: &'r mut dyn SearchNotifier,
    notifications: usize,
}

impl SearchRun<'_, '_> {
    /// Poll for a stop request
    pub(crate) fn check(&self) -> Step {
        self.control.check()
    }

    /// Sound the visited value, wait out the visit and poll for a stop request
    pub(crate) fn visit(&mut self, value: u32, nominal_ms: u32) -> Step {
        self.control.tone(value);
        self.control.pause(nominal_ms)
    }

    /// Highlight a window of positions
    pub(crate) fn show(&mut self, window: &[usize]) -> Step {
        Ok(self.emit(window, None)?)
    }

    fn emit(&mut self, window: &[usize], found: Option<bool>) -> Result<()> {
        self.notifier.notify(window, found)?;
        self.notifications += 1;
        Ok(())
    }
}

/// Search for `target` in an internally sorted copy of `input`
///
/// The caller's sequence is never reordered. Every visit is highlighted,
/// and the run ends with either `[index]` marked found or an empty window
/// marked not found. A stop request or a failing sink also ends with the
/// empty not-found window, delivered to the sink when it still accepts it.
///
/// # Errors
///
/// Returns the sink's error if a notification fails
pub fn run_search(
    algorithm: SearchAlgorithm,
    input: &[u32],
    target: u32,
    notifier: &mut dyn SearchNotifier,
    control: &mut StepControl<'_>,
) -> Result<SearchReport> {
    let started = Instant::now();
    log::debug!(
        "starting {algorithm} for {target} among {} values",
        input.len()
    );

    let mut sorted = input.to_vec();
    sorted.sort_unstable();

    let mut run = SearchRun {
        control,
        notifier,
        notifications: 0,
    };

    let outcome = match algorithm {
        SearchAlgorithm::Binary => binary::search(&mut run, &sorted, target),
        SearchAlgorithm::Jump => jump::search(&mut run, &sorted, target),
    };

    let (status, index) = match outcome {
        Ok(index) => (RunStatus::Completed, index),
        Err(Halt::Cancelled) => (RunStatus::Cancelled, None),
        Err(Halt::Failed(err)) => {
            if let Err(terminal_err) = run.emit(&[], Some(false)) {
                log::warn!("could not clear display after {algorithm} failed: {terminal_err}");
            }
            return Err(err.during(algorithm.name()));
        }
    };

    let terminal = match index {
        Some(found) => run.emit(&[found], Some(true)),
        None => run.emit(&[], Some(false)),
    };
    terminal.map_err(|err| err.during(algorithm.name()))?;

    let report = SearchReport {
        algorithm,
        status,
        target,
        index,
        sorted,
        notifications: run.notifications,
        elapsed: started.elapsed(),
    };
    log::info!(
        "{algorithm} {:?} with result {} after {} notifications",
        report.status,
        report.position(),
        report.notifications
    );
    Ok(report)
}

/// Animate binary search
///
/// # Errors
///
/// See [`run_search`]
pub fn binary_search(
    input: &[u32],
    target: u32,
    notifier: &mut dyn SearchNotifier,
    control: &mut StepControl<'_>,
) -> Result<SearchReport> {
    run_search(SearchAlgorithm::Binary, input, target, notifier, control)
}

/// Animate jump search
///
/// # Errors
///
/// See [`run_search`]
pub fn jump_search(
    input: &[u32],
    target: u32,
    notifier: &mut dyn SearchNotifier,
    control: &mut StepControl<'_>,
) -> Result<SearchReport> {
    run_search(SearchAlgorithm::Jump, input, target, notifier, control)
}
