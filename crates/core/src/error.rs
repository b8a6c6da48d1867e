//! Error types for deck parsing and rendering.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or rendering a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// No slides were parsed from the markdown input.
    #[error("No slides found in markdown input")]
    EmptyDeck,

    /// ZIP container error while writing the presentation package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Failed to build part of the presentation document.
    #[error("Presentation rendering error: {0}")]
    RenderError(String),
}
