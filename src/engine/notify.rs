//! Sinks that observe a run step by step
//!
//! Notifications are delivered synchronously, in the order the algorithm
//! produces them, and are never buffered or coalesced by the engine.

use crate::engine::settled::SettledSet;
use crate::io::error::Result;

/// Receives the working sequence after each state-changing sort step
pub trait SortNotifier {
    /// Observe the current snapshot and settled positions
    ///
    /// # Errors
    ///
    /// An error aborts the run; the engine restores the pre-run sequence
    /// and reports the error to the caller
    fn notify(&mut self, snapshot: &[u32], settled: &SettledSet) -> Result<()>;
}

impl<F> SortNotifier for F
where
    F: FnMut(&[u32], &SettledSet) -> Result<()>,
{
    fn notify(&mut self, snapshot: &[u32], settled: &SettledSet) -> Result<()> {
        self(snapshot, settled)
    }
}

/// Receives the active index window after each search visit
pub trait SearchNotifier {
    /// Observe the visited window
    ///
    /// `found` is `None` while probing and `Some` on the terminal event.
    ///
    /// # Errors
    ///
    /// An error aborts the search and is reported to the caller
    fn notify(&mut self, window: &[usize], found: Option<bool>) -> Result<()>;
}

impl<F> SearchNotifier for F
where
    F: FnMut(&[usize], Option<bool>) -> Result<()>,
{
    fn notify(&mut self, window: &[usize], found: Option<bool>) -> Result<()> {
        self(window, found)
    }
}

/// Fire-and-forget audio side channel keyed by frequency
///
/// Implementations must not fail observably; a missing backend is a no-op.
pub trait ToneSink {
    /// Play a short tone
    fn play(&mut self, frequency_hz: f32);
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn play(&mut self, frequency_hz: f32) {
        (**self).play(frequency_hz);
    }
}

/// Audio backend that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silence;

impl ToneSink for Silence {
    fn play(&mut self, _frequency_hz: f32) {}
}

/// Tone backend that traces frequencies to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneTrace;

impl ToneSink for ToneTrace {
    fn play(&mut self, frequency_hz: f32) {
        log::trace!("tone {frequency_hz:.0} Hz");
    }
}

/// One recorded sort notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortFrame {
    /// Sequence as shown
    pub values: Vec<u32>,
    /// Settled positions as shown
    pub settled: Vec<usize>,
}

/// One recorded search notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFrame {
    /// Highlighted positions
    pub window: Vec<usize>,
    /// Terminal outcome, if this was the last event
    pub found: Option<bool>,
}

/// Keeps every notification in arrival order
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    /// Sort notifications
    pub sort_frames: Vec<SortFrame>,
    /// Search notifications
    pub search_frames: Vec<SearchFrame>,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent sort notification
    pub fn last_sort(&self) -> Option<&SortFrame> {
        self.sort_frames.last()
    }

    /// Most recent search notification
    pub fn last_search(&self) -> Option<&SearchFrame> {
        self.search_frames.last()
    }
}

impl SortNotifier for Recorder {
    fn notify(&mut self, snapshot: &[u32], settled: &SettledSet) -> Result<()> {
        self.sort_frames.push(SortFrame {
            values: snapshot.to_vec(),
            settled: settled.to_vec(),
        });
        Ok(())
    }
}

impl SearchNotifier for Recorder {
    fn notify(&mut self, window: &[usize], found: Option<bool>) -> Result<()> {
        self.search_frames.push(SearchFrame {
            window: window.to_vec(),
            found,
        });
        Ok(())
    }
}
