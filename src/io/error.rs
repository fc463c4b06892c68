//! Error types and path context for codec and tileset operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::direction::Direction;

/// Main error type for all classification, decoding and composition operations
#[derive(Debug)]
pub enum TileError {
    /// A direction operation received an operand it is not defined on
    ///
    /// Always a caller bug: aggregates cannot be rotated, corners cannot be
    /// built from sides, and so on.
    InvalidDirectionOperand {
        /// The rejected direction
        direction: Direction,
        /// Name of the operation that rejected it
        operation: &'static str,
    },

    /// None of the four classification cases matched a neighbourhood
    ///
    /// The case partition is exhaustive, so this signals a defect in the
    /// encoder rather than bad input.
    EncoderInvariantViolation {
        /// The offending occupancy pattern, bit i set for compass point i
        neighborhood: u8,
    },

    /// A texture index outside `0..=46`
    DecoderRange {
        /// The rejected value
        index: u8,
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

    /// Source images don't meet composition requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
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

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectionOperand {
                direction,
                operation,
            } => {
                write!(f, "Direction '{direction}' is not a valid operand for {operation}")
            }
            Self::EncoderInvariantViolation { neighborhood } => {
                write!(
                    f,
                    "No classification case matched neighbourhood {neighborhood:#010b}"
                )
            }
            Self::DecoderRange { index } => {
                write!(f, "Texture index {index} is out of range (valid: 0..=46)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile results
pub type Result<T> = std::result::Result<T, TileError>;

/// Attaches a filesystem path to errors that were converted without one
pub trait WithPath<T> {
    /// Replace the placeholder path of I/O and image errors with `path`
    ///
    /// # Errors
    ///
    /// Propagates the underlying error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TileError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TileError::ImageLoad { path: target, .. }
                | TileError::ImageExport { path: target, .. }
                | TileError::FileSystem { path: target, .. } => {
                    *target = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileError {
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
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
