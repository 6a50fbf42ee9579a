//! Real-time pacing of algorithm steps

use crate::io::configuration::{
    AnimationStyle, MAX_SMOOTH_DELAY_MS, MIN_SORT_DELAY_MS, RunOptions, Speed,
};
use std::time::Duration;

/// Suspends the calling thread
pub trait Sleeper {
    /// Block for the given duration
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps on the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Delay shaping for one engine family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingProfile {
    /// Sort steps: floored, and capped as well with the smooth style
    Sorting,
    /// Search visits: plain `nominal / speed`
    Searching,
}

/// Converts nominal step delays into real waits
///
/// Speed is a divisor: at speed 10 a 200 ms step waits 20 ms. With
/// animation disabled nothing ever sleeps.
pub struct Pacer {
    options: RunOptions,
    speed: Speed,
    profile: PacingProfile,
    sleeper: Box<dyn Sleeper + Send>,
    waits: usize,
    total: Duration,
}

impl Pacer {
    /// Pacer with an explicit profile and the thread sleeper
    pub fn new(options: RunOptions, speed: Speed, profile: PacingProfile) -> Self {
        Self {
            options,
            speed,
            profile,
            sleeper: Box::new(ThreadSleeper),
            waits: 0,
            total: Duration::ZERO,
        }
    }

    /// Pacer configured for sort engines
    pub fn for_sorting(options: RunOptions, speed: Speed) -> Self {
        Self::new(options, speed, PacingProfile::Sorting)
    }

    /// Pacer configured for search engines
    pub fn for_searching(options: RunOptions, speed: Speed) -> Self {
        Self::new(options, speed, PacingProfile::Searching)
    }

    /// Replace the sleep backend
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + Send + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Real delay a nominal step delay maps to, or `None` when unpaced
    pub fn effective_delay(&self, nominal_ms: u32) -> Option<Duration> {
        if !self.options.show_animation {
            return None;
        }

        let scaled = f64::from(nominal_ms) / f64::from(self.speed.get());
        let millis = match (self.profile, self.options.animation_style) {
            (PacingProfile::Searching, _) => scaled,
            (PacingProfile::Sorting, AnimationStyle::Basic) => scaled.max(MIN_SORT_DELAY_MS),
            (PacingProfile::Sorting, AnimationStyle::Smooth) => {
                scaled.clamp(MIN_SORT_DELAY_MS, MAX_SMOOTH_DELAY_MS)
            }
        };

        Some(Duration::from_micros((millis * 1000.0).round() as u64))
    }

    /// Suspend for the paced equivalent of `nominal_ms`
    pub fn wait(&mut self, nominal_ms: u32) {
        if let Some(delay) = self.effective_delay(nominal_ms) {
            self.waits += 1;
            self.total += delay;
            self.sleeper.sleep(delay);
        }
    }

    /// Number of waits that actually slept
    pub const fn waits(&self) -> usize {
        self.waits
    }

    /// Sum of all slept delays
    pub const fn total_delay(&self) -> Duration {
        self.total
    }

    /// Options this pacer was built from
    pub const fn options(&self) -> &RunOptions {
        &self.options
    }
}
