//! Input arrays: seeded random generation, parsing and the shown/original pair

use crate::io::configuration::{MAX_VALUE, MIN_VALUE};
use crate::io::error::{Result, VisualizerError, invalid_parameter};
use crate::sorting::SortReport;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator for reproducible arrays
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `size` values uniformly from `MIN_VALUE..=MAX_VALUE`
    pub fn generate(&mut self, size: usize) -> Vec<u32> {
        (0..size)
            .map(|_| self.rng.random_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}

/// Parse a list of non-negative integers separated by commas or whitespace
///
/// # Errors
///
/// Returns an error if a token is not a valid `u32` or the list is empty
pub fn parse_values(text: &str) -> Result<Vec<u32>> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<u32>()
                .map_err(|_parse_error| VisualizerError::InvalidValue {
                    position,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(invalid_parameter("values", &text, &"no values given"));
    }
    Ok(values)
}

/// The array as generated and the array as currently shown
///
/// A completed sort replaces what is shown; reset brings back the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayState {
    original: Vec<u32>,
    current: Vec<u32>,
}

impl ArrayState {
    /// Start from a known array
    pub fn from_values(values: Vec<u32>) -> Self {
        Self {
            current: values.clone(),
            original: values,
        }
    }

    /// Replace both arrays with freshly generated values
    pub fn regenerate(&mut self, generator: &mut ArrayGenerator, size: usize) {
        *self = Self::from_values(generator.generate(size));
    }

    /// Show the original array again
    pub fn reset(&mut self) {
        self.current.clone_from(&self.original);
    }

    /// Adopt the sequence a sort run left on display
    pub fn apply(&mut self, report: &SortReport) {
        self.current.clone_from(&report.values);
    }

    /// Array as generated
    pub fn original(&self) -> &[u32] {
        &self.original
    }

    /// Array as shown
    pub fn current(&self) -> &[u32] {
        &self.current
    }
}
