//! Command-line interface for animating one sort or search run
//!
//! The binary runs each job to completion; stopping a run in flight is
//! available through [`Session`] in the library.

use crate::engine::RunStatus;
use crate::engine::notify::{SearchNotifier, Silence, SortNotifier, ToneSink, ToneTrace};
use crate::engine::session::Session;
use crate::engine::settled::SettledSet;
use crate::io::configuration::{
    AnimationStyle, DEFAULT_ARRAY_SIZE, DEFAULT_SEARCH_TARGET, DEFAULT_SEED, DEFAULT_SPEED,
    GIF_FRAME_DELAY_MS, MAX_SPEED, MIN_SPEED, RunOptions, Speed,
};
use crate::io::dataset::{ArrayGenerator, ArrayState, parse_values};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::RunProgress;
use crate::io::visualization::AnimationCapture;
use crate::searching::{SearchAlgorithm, SearchReport};
use crate::sorting::{SortAlgorithm, SortReport};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(
    author,
    version,
    about = "Animate classic sorting and searching algorithms step by step"
)]
/// Command-line arguments for the visualizer
pub struct Cli {
    /// Which engine to run
    #[command(subcommand)]
    pub command: Command,

    /// Input array and run settings
    #[command(flatten)]
    pub settings: Settings,
}

/// Engine selection
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Sort the array
    Sort {
        /// Sorting algorithm
        #[arg(value_enum)]
        algorithm: SortAlgorithm,
    },
    /// Search the array for a target value
    Search {
        /// Searching algorithm
        #[arg(value_enum)]
        algorithm: SearchAlgorithm,

        /// Value to look for
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_TARGET)]
        target: u32,
    },
}

/// Flags shared by both engines
#[derive(Args, Debug, Clone)]
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Explicit values, separated by commas or spaces (overrides --size)
    #[arg(long, global = true)]
    pub values: Option<String>,

    /// Number of random values to generate
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Random seed for reproducible arrays
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Speed multiplier, higher is faster
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_SPEED)..=i64::from(MAX_SPEED))
    )]
    pub speed: u8,

    /// Compute the result without pacing steps in real time
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Keep every step delay inside the smooth band
    #[arg(long, global = true)]
    pub smooth: bool,

    /// Do not emit tones
    #[arg(long, global = true)]
    pub mute: bool,

    /// Do not report settled positions
    #[arg(long, global = true)]
    pub no_highlight: bool,

    /// Print the values with the final array
    #[arg(long, global = true)]
    pub show_values: bool,

    /// Write the run as an animated GIF
    #[arg(long, global = true, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Settings {
    /// Run options selected by the flags
    pub const fn run_options(&self) -> RunOptions {
        RunOptions {
            show_animation: !self.no_animation,
            highlight_sorted: !self.no_highlight,
            play_sound: !self.mute,
            animation_style: if self.smooth {
                AnimationStyle::Smooth
            } else {
                AnimationStyle::Basic
            },
            show_values: self.show_values,
        }
    }

    /// Validated speed multiplier
    ///
    /// # Errors
    ///
    /// Returns an error if the speed is out of range
    pub fn speed(&self) -> Result<Speed> {
        Speed::new(self.speed)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Array the run starts from
    ///
    /// # Errors
    ///
    /// Returns an error if explicit values fail to parse or the size is zero
    pub fn array(&self) -> Result<ArrayState> {
        if let Some(text) = &self.values {
            return Ok(ArrayState::from_values(parse_values(text)?));
        }
        if self.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"at least one value is required",
            ));
        }

        let mut state = ArrayState::default();
        state.regenerate(&mut ArrayGenerator::new(self.seed), self.size);
        Ok(state)
    }
}

/// Drives one run from parsed arguments to printed summary
pub struct Runner {
    cli: Cli,
    session: Session,
    array: ArrayState,
}

impl Runner {
    /// Prepare the session and input array
    ///
    /// # Errors
    ///
    /// Returns an error if the speed or the input array is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let session = Session::new(cli.settings.run_options(), cli.settings.speed()?);
        let array = cli.settings.array()?;
        Ok(Self {
            cli,
            session,
            array,
        })
    }

    /// Array the run starts from
    pub const fn array(&self) -> &ArrayState {
        &self.array
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the run or the GIF export fails
    pub fn run(&mut self) -> Result<()> {
        match self.cli.command {
            Command::Sort { algorithm } => {
                let report = self.sort(algorithm)?;
                self.array.apply(&report);
                self.print_sort(&report);
            }
            Command::Search { algorithm, target } => {
                let report = self.search(algorithm, target)?;
                self.print_search(&report);
            }
        }
        Ok(())
    }

    fn tone(&self) -> Box<dyn ToneSink> {
        if self.session.options().play_sound {
            Box::new(ToneTrace)
        } else {
            Box::new(Silence)
        }
    }

    /// Run a sort through the session, feeding progress and GIF capture
    ///
    /// # Errors
    ///
    /// Returns an error if the run or the GIF export fails
    pub fn sort(&self, algorithm: SortAlgorithm) -> Result<SortReport> {
        let input = self.array.current().to_vec();
        let mut progress = if self.cli.settings.should_show_progress() {
            RunProgress::for_sort(algorithm.name(), input.len())
        } else {
            RunProgress::hidden()
        };
        let mut capture = self.cli.settings.gif.as_ref().map(|_| AnimationCapture::new());

        let mut notifier = |snapshot: &[u32], settled: &SettledSet| -> Result<()> {
            if let Some(capture) = capture.as_mut() {
                SortNotifier::notify(capture, snapshot, settled)?;
            }
            progress.sort_step(settled);
            Ok(())
        };
        let report = self
            .session
            .sort(algorithm, &input, &mut notifier, self.tone());
        progress.finish();

        let report = report?;
        if let (Some(path), Some(capture)) = (&self.cli.settings.gif, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }
        Ok(report)
    }

    /// Run a search through the session, feeding progress and GIF capture
    ///
    /// # Errors
    ///
    /// Returns an error if the run or the GIF export fails
    pub fn search(&self, algorithm: SearchAlgorithm, target: u32) -> Result<SearchReport> {
        let input = self.array.current().to_vec();
        let mut progress = if self.cli.settings.should_show_progress() {
            RunProgress::for_search(algorithm.name())
        } else {
            RunProgress::hidden()
        };
        let mut capture = self.cli.settings.gif.as_ref().map(|_| {
            let mut sorted = input.clone();
            sorted.sort_unstable();
            AnimationCapture::new().with_backdrop(sorted)
        });

        let mut notifier = |window: &[usize], found: Option<bool>| -> Result<()> {
            if let Some(capture) = capture.as_mut() {
                SearchNotifier::notify(capture, window, found)?;
            }
            progress.search_step(window);
            Ok(())
        };
        let report = self
            .session
            .search(algorithm, &input, target, &mut notifier, self.tone());
        progress.finish();

        let report = report?;
        if let (Some(path), Some(capture)) = (&self.cli.settings.gif, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }
        Ok(report)
    }

    // Allow print for the run summary, the program's actual output
    #[allow(clippy::print_stdout)]
    fn print_sort(&self, report: &SortReport) {
        let status = match report.status {
            RunStatus::Completed => "sorted",
            RunStatus::Cancelled => "stopped",
        };
        println!(
            "{} {status} {} values in {:.2?} ({} steps)",
            report.algorithm,
            report.values.len(),
            report.elapsed,
            report.notifications
        );
        if self.session.options().show_values {
            println!("{:?}", report.values);
        }
        if let Some(path) = &self.cli.settings.gif {
            print_gif_path(path);
        }
    }

    #[allow(clippy::print_stdout)]
    fn print_search(&self, report: &SearchReport) {
        match report.index {
            Some(index) => println!(
                "{} found {} at index {index} in {:.2?}",
                report.algorithm, report.target, report.elapsed
            ),
            None => println!(
                "{} did not find {} in {:.2?}",
                report.algorithm, report.target, report.elapsed
            ),
        }
        if self.session.options().show_values {
            println!("{:?}", report.sorted);
        }
        if let Some(path) = &self.cli.settings.gif {
            print_gif_path(path);
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_gif_path(path: &Path) {
    println!("animation written to {}", path.display());
}
