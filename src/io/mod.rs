//! Input/output operations, configuration and error handling

/// Command-line interface and operation dispatch
pub mod cli;
/// Codec constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Source, mask and tile image files
pub mod image;
/// Progress display for tileset generation
pub mod progress;
