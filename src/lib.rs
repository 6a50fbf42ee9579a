//! Step-by-step animation engine for classic sorting and searching algorithms
//!
//! Each algorithm runs over a private copy of its input and reports every
//! comparison, swap, shift or merge write to a notification sink, paced in
//! real time by a speed-scaled delay and stoppable at any step boundary.

#![forbid(unsafe_code)]

/// Pacing, cancellation, notification sinks and run serialization
pub mod engine;
/// Input/output operations, configuration and error handling
pub mod io;
/// Stepped binary and jump search
pub mod searching;
/// Eight stepped sorting algorithms
pub mod sorting;

pub use io::error::{Result, VisualizerError};
