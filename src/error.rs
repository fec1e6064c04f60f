//! Error types for badge rendering and file output

use thiserror::Error;

/// Result type alias for badgeforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing icon files
///
/// The taxonomy is deliberately narrow: the raster and encode paths are pure
/// and infallible, so errors only arise at the outer surface (argument
/// parsing and file writing).
#[derive(Error, Debug)]
pub enum Error {
    /// A requested icon size was not a positive number of pixels
    #[error("Invalid icon size: {0} (must be > 0)")]
    InvalidSize(u32),

    /// A color or option value could not be parsed
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Writing an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
