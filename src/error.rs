//! Error types for the docx2txt library.

use std::io;
use thiserror::Error;

/// Result type alias for docx2txt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening, parsing, or converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file or directory operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a readable ZIP package.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing (e.g. `word/document.xml`).
    #[error("missing package part: {0}")]
    MissingPart(String),

    /// A part's bytes could not be decoded as text.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
