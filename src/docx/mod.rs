//! DOCX (Word) document parser.
//!
//! Streams `word/document.xml` and extracts the ordered paragraph texts.

mod parser;

pub use parser::DocxParser;
