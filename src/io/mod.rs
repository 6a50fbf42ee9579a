/// Command-line interface and run orchestration
pub mod cli;
/// Constants, run options and speed
pub mod configuration;
/// Random generation and parsing of input arrays
pub mod dataset;
/// Error types
pub mod error;
/// Terminal progress display
pub mod progress;
/// Animated GIF export of captured runs
pub mod visualization;
