//! Error types for engine runs, input parsing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all visualizer operations
#[derive(Debug)]
pub enum VisualizerError {
    /// A notification sink rejected a step
    ///
    /// The run that was driving the sink is aborted and, for sorts, the
    /// pre-run sequence is restored before this error reaches the caller.
    Notifier {
        /// Name of the algorithm whose run was aborted
        algorithm: &'static str,
        /// Description supplied by the sink
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A value list could not be parsed
    InvalidValue {
        /// Zero-based position of the offending token
        position: usize,
        /// The token as it appeared in the input
        token: String,
    },

    /// A run was started while another run of the same family was active
    RunInProgress {
        /// Engine family that is busy
        family: &'static str,
    },

    /// Failed to encode or save an animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notifier { algorithm, reason } => {
                write!(f, "Notifier failed during {algorithm}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidValue { position, token } => {
                write!(f, "Invalid value '{token}' at position {position}")
            }
            Self::RunInProgress { family } => {
                write!(f, "A {family} run is already in progress")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualizer results
pub type Result<T> = std::result::Result<T, VisualizerError>;

impl From<std::io::Error> for VisualizerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VisualizerError {
    VisualizerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a notifier failure for sinks to return from a callback
///
/// The algorithm name is filled in by the engine when the error surfaces.
pub fn notifier_error(reason: &impl ToString) -> VisualizerError {
    VisualizerError::Notifier {
        algorithm: "unknown",
        reason: reason.to_string(),
    }
}

impl VisualizerError {
    /// Attribute a notifier failure to the algorithm that was running
    #[must_use]
    pub fn during(self, name: &'static str) -> Self {
        match self {
            Self::Notifier { reason, .. } => Self::Notifier {
                algorithm: name,
                reason,
            },
            other => other,
        }
    }
}
