//! Terminal progress display for a running sort or search

use crate::engine::settled::SettledSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.green/white}] {pos}/{len} settled {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} visit {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows how far the current run has progressed
///
/// Sorts report settled positions against the array length; searches count
/// visits since their length is not known up front.
pub struct RunProgress {
    bar: ProgressBar,
    steps: u64,
}

impl RunProgress {
    /// Bar for a sort over `len` values
    pub fn for_sort(name: &str, len: usize) -> Self {
        let bar = ProgressBar::new(len as u64);
        bar.set_style(SORT_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar, steps: 0 }
    }

    /// Spinner for a search
    pub fn for_search(name: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SEARCH_STYLE.clone());
        bar.set_prefix(name.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar, steps: 0 }
    }

    /// Progress that draws nothing, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            steps: 0,
        }
    }

    /// Record a sort notification
    pub fn sort_step(&mut self, settled: &SettledSet) {
        self.steps += 1;
        self.bar.set_position(settled.count() as u64);
        self.bar.set_message(format!("({} steps)", self.steps));
    }

    /// Record a search notification
    pub fn search_step(&mut self, window: &[usize]) {
        self.steps += 1;
        self.bar.set_position(self.steps);
        self.bar.set_message(format!("{window:?}"));
    }

    /// Notifications seen so far
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
