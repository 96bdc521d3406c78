//! # docx2txt
//!
//! Batch extraction of plain paragraph text from Word (.docx) documents.
//!
//! The library parses the OOXML package directly (`zip` + `quick-xml`) and
//! reduces a document to its ordered body-level paragraph texts. On top of
//! that sits a small batch engine that converts every `.docx` file in a
//! directory into a `.txt` file in another, isolating failures per file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx2txt::{extract_text, parse_file};
//!
//! // Simple text extraction
//! let text = extract_text("document.docx")?;
//! println!("{}", text);
//!
//! // Full parsing with access to paragraphs and metadata
//! let doc = parse_file("document.docx")?;
//! println!("Paragraphs: {}", doc.paragraphs.len());
//! # Ok::<(), docx2txt::Error>(())
//! ```
//!
//! ## Batch Conversion
//!
//! ```no_run
//! use docx2txt::batch::convert_dir;
//!
//! let reports = convert_dir("docs".as_ref(), "extracted".as_ref())?;
//! let failed = reports.iter().filter(|r| !r.is_ok()).count();
//! println!("{} converted, {} failed", reports.len() - failed, failed);
//! # Ok::<(), docx2txt::Error>(())
//! ```

pub mod batch;
pub mod container;
pub mod docx;
pub mod error;
pub mod model;

// Re-exports
pub use batch::{convert_dir, FileReport};
pub use container::DocxContainer;
pub use docx::DocxParser;
pub use error::{Error, Result};
pub use model::{Document, Metadata};

use std::path::Path;

/// Parse a `.docx` file and return a Document model.
///
/// # Example
///
/// ```no_run
/// use docx2txt::parse_file;
///
/// let doc = parse_file("document.docx")?;
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a document from bytes.
///
/// # Example
///
/// ```no_run
/// use docx2txt::parse_bytes;
///
/// let data = std::fs::read("document.docx")?;
/// let doc = parse_bytes(data)?;
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn parse_bytes(data: Vec<u8>) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Extract a document's plain text: paragraph texts joined with newlines.
///
/// # Example
///
/// ```no_run
/// use docx2txt::extract_text;
///
/// let text = extract_text("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), docx2txt::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}
