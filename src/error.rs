//! Error types for the icon exporter

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the icon table or exporting icons
#[derive(Error, Debug)]
pub enum Error {
    /// Unreadable input file or invalid option value
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Requested icon name is not in the active table
    #[error("Unknown icon name ({0})")]
    UnknownIcon(String),

    /// Font file could not be parsed
    #[error("Font error: {0}")]
    FontError(String),

    /// Glyph could not be rendered (e.g. blank glyph with no ink)
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Malformed `content` value in a stylesheet rule
    #[error("Stylesheet parse error: {0}")]
    StylesheetError(String),

    /// Image encoding failure
    #[error("Image error: {0}")]
    ImageError(String),

    /// Filesystem error while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::ImageError(other.to_string()),
        }
    }
}
