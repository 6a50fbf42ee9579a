//! Serializes runs per engine family and routes stop requests
//!
//! The engines themselves do not guard against overlapping runs sharing a
//! token. A `Session` rejects a second start of the same family while one is
//! in flight, and gives each family its own token so stopping a sort never
//! touches a search.

use crate::engine::StepControl;
use crate::engine::cancellation::{Cancellable, CancellationToken};
use crate::engine::notify::{SearchNotifier, SortNotifier, ToneSink};
use crate::io::configuration::{RunOptions, Speed};
use crate::io::error::{Result, VisualizerError};
use crate::searching::{SearchAlgorithm, SearchReport, run_search};
use crate::sorting::{SortAlgorithm, SortReport, run_sort};
use std::sync::atomic::{AtomicBool, Ordering};

/// Token and busy flag of one engine family
#[derive(Debug)]
struct Family {
    name: &'static str,
    token: CancellationToken,
    busy: AtomicBool,
}

impl Family {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            token: CancellationToken::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Claim the family for a run and clear any earlier stop request
    fn acquire(&self) -> Result<RunGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(VisualizerError::RunInProgress { family: self.name });
        }
        self.token.reset();
        Ok(RunGuard { busy: &self.busy })
    }
}

/// Releases the family when the run ends, however it ends
struct RunGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Caller-side controller for both engine families
///
/// Options and speed are captured into each run when it starts; changing
/// them later only affects subsequent runs.
#[derive(Debug)]
pub struct Session {
    options: RunOptions,
    speed: Speed,
    sorting: Family,
    searching: Family,
}

impl Session {
    /// Create an idle session
    pub fn new(options: RunOptions, speed: Speed) -> Self {
        Self {
            options,
            speed,
            sorting: Family::new("sort"),
            searching: Family::new("search"),
        }
    }

    /// Options applied to the next run
    pub const fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Change the options for subsequent runs
    pub const fn set_options(&mut self, options: RunOptions) {
        self.options = options;
    }

    /// Speed applied to the next run
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    /// Change the speed for subsequent runs
    pub const fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Run a sort, rejecting the start if another sort is in flight
    ///
    /// # Errors
    ///
    /// Returns an error if a sort is already running or the sink fails
    pub fn sort(
        &self,
        algorithm: SortAlgorithm,
        input: &[u32],
        notifier: &mut dyn SortNotifier,
        tone: impl ToneSink,
    ) -> Result<SortReport> {
        let _guard = self.sorting.acquire()?;
        let mut control =
            StepControl::sorting(self.options, self.speed, &self.sorting.token).with_tone(tone);
        run_sort(algorithm, input, notifier, &mut control)
    }

    /// Run a search, rejecting the start if another search is in flight
    ///
    /// # Errors
    ///
    /// Returns an error if a search is already running or the sink fails
    pub fn search(
        &self,
        algorithm: SearchAlgorithm,
        input: &[u32],
        target: u32,
        notifier: &mut dyn SearchNotifier,
        tone: impl ToneSink,
    ) -> Result<SearchReport> {
        let _guard = self.searching.acquire()?;
        let mut control =
            StepControl::searching(self.options, self.speed, &self.searching.token).with_tone(tone);
        run_search(algorithm, input, target, notifier, &mut control)
    }

    /// Ask the in-flight sort to stop at its next step boundary
    pub fn stop_sorting(&self) {
        log::debug!("stop requested for sorting");
        self.sorting.token.cancel();
    }

    /// Ask the in-flight search to stop at its next step boundary
    pub fn stop_searching(&self) {
        log::debug!("stop requested for searching");
        self.searching.token.cancel();
    }

    /// Test whether a sort is in flight
    pub fn is_sorting(&self) -> bool {
        self.sorting.busy.load(Ordering::Acquire)
    }

    /// Test whether a search is in flight
    pub fn is_searching(&self) -> bool {
        self.searching.busy.load(Ordering::Acquire)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RunOptions::default(), Speed::default())
    }
}
