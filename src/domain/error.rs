//! Error types for the show detail screen.
//!
//! This module defines the centralized error type [`ScreenError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for screen construction and interaction.
///
/// Configuration mistakes (a featured index that addresses no record) are
/// reported as typed variants instead of being clamped, so a misconfigured
/// screen aborts as a whole rather than rendering a partial tree.
///
/// # Examples
///
/// ```
/// use flexchill::ScreenError;
///
/// let err = ScreenError::FeaturedIndexOutOfRange { index: 5, len: 5 };
/// assert_eq!(
///     err.to_string(),
///     "Featured index 5 is out of range for a collection of 5 shows"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The configured featured index does not address a show record.
    #[error("Featured index {index} is out of range for a collection of {len} shows")]
    FeaturedIndexOutOfRange {
        /// Configured index.
        index: usize,
        /// Number of records in the collection.
        len: usize,
    },

    /// A list row index past the end of the collection.
    #[error("Row {index} is out of range for a list of {len} rows")]
    RowOutOfRange {
        /// Requested row.
        index: usize,
        /// Number of rows in the list.
        len: usize,
    },

    /// The show catalog could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The asset manifest could not be parsed.
    #[error("Asset manifest error: {0}")]
    Asset(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The layout engine rejected the node tree.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for screen operations.
pub type Result<T> = std::result::Result<T, ScreenError>;
