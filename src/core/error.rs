use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an invoice load.
///
/// Field-level defaulting (missing or unparsable strings, booleans and
/// numbers) is not an error and never surfaces here; only the conditions
/// below are fatal, and none of them returns a partial document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReaderError {
    /// The named input file does not exist. Raised before any parsing.
    #[error("invoice file not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading the input stream or file failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// A date element declares a `format` other than `"102"`.
    #[error("unsupported date format '{0}' (only format 102 is supported)")]
    UnsupportedDateFormat(String),

    /// A date element is missing, or its text is not a valid 8-digit
    /// `YYYYMMDD` value.
    #[error("malformed date: {0}")]
    MalformedDate(String),

    /// Path evaluation failed in a way that is not a recoverable
    /// expression error, or a required element could not be selected.
    #[error("path evaluation failed: {0}")]
    PathEvaluation(String),
}
