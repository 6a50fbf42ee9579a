//! Engine constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

// Nominal per-step delays, divided by the speed multiplier before pacing
/// Delay after a bubble sort swap or pass
pub const BUBBLE_STEP_DELAY_MS: u32 = 200;
/// Delay after highlighting a comparison
pub const COMPARE_DELAY_MS: u32 = 50;
/// Delay after a swap, shift or merge write
pub const PLACEMENT_DELAY_MS: u32 = 100;
/// Delay after settling a position
pub const SETTLE_DELAY_MS: u32 = 50;
/// Delay after each search visit
pub const SEARCH_VISIT_DELAY_MS: u32 = 500;

// Pacing band applied to sort delays
/// Shortest delay a sort step is ever paced at
pub const MIN_SORT_DELAY_MS: f64 = 20.0;
/// Longest delay a sort step is paced at with the smooth style
pub const MAX_SMOOTH_DELAY_MS: f64 = 500.0;

/// Slowest speed multiplier
pub const MIN_SPEED: u8 = 1;
/// Fastest speed multiplier
pub const MAX_SPEED: u8 = 10;
/// Speed multiplier used when none is given
pub const DEFAULT_SPEED: u8 = 5;

/// Number of bars in a freshly generated array
pub const DEFAULT_ARRAY_SIZE: usize = 50;
/// Smallest generated value
pub const MIN_VALUE: u32 = 1;
/// Largest generated value
pub const MAX_VALUE: u32 = 100;
/// Value searched for when none is given
pub const DEFAULT_SEARCH_TARGET: u32 = 50;
/// Fixed seed for reproducible arrays
pub const DEFAULT_SEED: u64 = 42;

// Tone frequency = base + value * step
/// Frequency of a zero value
pub const TONE_BASE_HZ: f32 = 200.0;
/// Frequency increase per unit of value
pub const TONE_HZ_PER_UNIT: f32 = 5.0;

// GIF output settings
/// Width of one bar in pixels
pub const GIF_BAR_WIDTH: u32 = 6;
/// Gap between bars in pixels
pub const GIF_BAR_GAP: u32 = 1;
/// Height of the drawing area in pixels
pub const GIF_HEIGHT: u32 = 200;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

/// How paced steps are shaped in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationStyle {
    /// Every step waits at least the minimum delay
    #[default]
    Basic,
    /// Step delays are kept inside a band so motion stays visible
    Smooth,
}

/// Immutable per-run option snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
// Mirrors the toggles exposed to the user one-to-one
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Pace steps in real time
    pub show_animation: bool,
    /// Report settled positions to the sink
    pub highlight_sorted: bool,
    /// Emit tones through the side channel
    pub play_sound: bool,
    /// Delay shaping style
    pub animation_style: AnimationStyle,
    /// Render values next to bars
    pub show_values: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            show_animation: true,
            highlight_sorted: true,
            play_sound: true,
            animation_style: AnimationStyle::Basic,
            show_values: false,
        }
    }
}

impl RunOptions {
    /// Options for a run that computes the result without pacing or sound
    pub const fn instant() -> Self {
        Self {
            show_animation: false,
            highlight_sorted: true,
            play_sound: false,
            animation_style: AnimationStyle::Basic,
            show_values: false,
        }
    }
}

/// Speed multiplier in `[MIN_SPEED, MAX_SPEED]`
///
/// Acts as a divisor on nominal delays: higher speed means shorter waits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    /// Validate a speed multiplier
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside `[MIN_SPEED, MAX_SPEED]`
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_SPEED..=MAX_SPEED).contains(&value) {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "speed",
                &value,
                &format!("must be between {MIN_SPEED} and {MAX_SPEED}"),
            ))
        }
    }

    /// Raw multiplier
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Frequency of the tone associated with a value
pub const fn tone_frequency(value: u32) -> f32 {
    TONE_BASE_HZ + value as f32 * TONE_HZ_PER_UNIT
}
