/// Cooperative cancellation tokens
pub mod cancellation;
/// Notification sinks and the tone side channel
pub mod notify;
/// Real-time pacing of steps
pub mod pacer;
/// Run serialization at the caller boundary
pub mod session;
/// Settled position tracking
pub mod settled;

use crate::engine::cancellation::Cancellable;
use crate::engine::notify::{Silence, ToneSink};
use crate::engine::pacer::Pacer;
use crate::io::configuration::{RunOptions, Speed, tone_frequency};
use crate::io::error::VisualizerError;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The algorithm ran to completion
    Completed,
    /// A stop request was observed at a step boundary
    Cancelled,
}

/// Everything a run consults besides its input and sink
///
/// Bundles the pacer, the cancellation capability polled at each step
/// boundary and the tone side channel.
pub struct StepControl<'a> {
    pacer: Pacer,
    cancel: &'a dyn Cancellable,
    tone: Box<dyn ToneSink + 'a>,
}

impl<'a> StepControl<'a> {
    /// Wrap an existing pacer, with sound going nowhere
    pub fn new(pacer: Pacer, cancel: &'a dyn Cancellable) -> Self {
        Self {
            pacer,
            cancel,
            tone: Box::new(Silence),
        }
    }

    /// Controls paced for a sort engine
    pub fn sorting(options: RunOptions, speed: Speed, cancel: &'a dyn Cancellable) -> Self {
        Self::new(Pacer::for_sorting(options, speed), cancel)
    }

    /// Controls paced for a search engine
    pub fn searching(options: RunOptions, speed: Speed, cancel: &'a dyn Cancellable) -> Self {
        Self::new(Pacer::for_searching(options, speed), cancel)
    }

    /// Route tones to a backend
    #[must_use]
    pub fn with_tone(mut self, tone: impl ToneSink + 'a) -> Self {
        self.tone = Box::new(tone);
        self
    }

    /// Pacer driving this run
    pub const fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Options captured for this run
    pub const fn options(&self) -> &RunOptions {
        self.pacer.options()
    }

    pub(crate) fn check(&self) -> Step {
        if self.cancel.is_cancelled() {
            Err(Halt::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Wait out a step, then poll for a stop request
    pub(crate) fn pause(&mut self, nominal_ms: u32) -> Step {
        self.pacer.wait(nominal_ms);
        self.check()
    }

    pub(crate) fn tone(&mut self, value: u32) {
        if self.pacer.options().play_sound {
            self.tone.play(tone_frequency(value));
        }
    }
}

/// Why an algorithm stopped before completing
#[derive(Debug)]
pub(crate) enum Halt {
    Cancelled,
    Failed(VisualizerError),
}

impl From<VisualizerError> for Halt {
    fn from(err: VisualizerError) -> Self {
        Self::Failed(err)
    }
}

/// Result of one algorithm step
pub(crate) type Step<T = ()> = std::result::Result<T, Halt>;
