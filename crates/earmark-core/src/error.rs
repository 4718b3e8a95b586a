//! Error types for Earmark

use thiserror::Error;

/// Earmark error type
///
/// Parse failures are not errors: a bad utterance produces a `ParseResult`
/// with `success == false`. This enum covers the operations that can
/// genuinely fail, which today is reading batch input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
