//! Error types for deck construction and PPTX packaging.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a presentation.
///
/// Construction failures surface as [`Error::Xml`]; packaging and
/// serialization failures surface as [`Error::Zip`] or [`Error::Io`].
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create or write the output file.
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP packaging error while assembling the OOXML container.
    #[error("ZIP packaging error: {0}")]
    Zip(String),

    /// XML generation error while building a presentation part.
    #[error("XML generation error: {0}")]
    Xml(String),
}
