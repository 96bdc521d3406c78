//! DOCX parser implementation.

use crate::container::DocxContainer;
use crate::error::{Error, Result};
use crate::model::Document;

/// Path of the main document part inside the package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    container: DocxContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = DocxContainer::open(path)?;
        Ok(Self { container })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = DocxContainer::from_bytes(data)?;
        Ok(Self { container })
    }

    /// Parse the document and return a Document model.
    pub fn parse(&mut self) -> Result<Document> {
        let mut doc = Document::new();
        doc.metadata = self.container.parse_core_metadata()?;
        doc.paragraphs = self.parse_document_xml()?;
        Ok(doc)
    }

    /// Extract body-level paragraph texts from `word/document.xml`.
    ///
    /// One streaming pass. Text accumulates only inside `w:t` elements;
    /// `w:tab` contributes a tab, `w:br`/`w:cr` a newline, and `w:instrText`
    /// (field codes) nothing. Paragraphs nested inside `w:tbl` are skipped,
    /// matching the body-level paragraph sequence of the main document story.
    fn parse_document_xml(&mut self) -> Result<Vec<String>> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;

        let mut reader = quick_xml::Reader::from_str(&xml);
        // Don't trim text - preserve whitespace from xml:space="preserve" runs
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        let mut in_body = false;
        let mut in_paragraph = false;
        let mut in_text = false;
        let mut in_instr_text = false;
        let mut table_depth: u32 = 0;
        let mut current = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                    b"w:body" => in_body = true,
                    b"w:tbl" if in_body => table_depth += 1,
                    b"w:p" if in_body && table_depth == 0 => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"w:t" if in_paragraph => in_text = true,
                    b"w:instrText" if in_paragraph => in_instr_text = true,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                    // A childless paragraph still counts as an (empty) paragraph
                    b"w:p" if in_body && table_depth == 0 => paragraphs.push(String::new()),
                    b"w:tab" if in_paragraph => current.push('\t'),
                    b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(ref e)) => {
                    if in_text && !in_instr_text {
                        let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                        current.push_str(&text);
                    }
                }
                Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                    b"w:body" => in_body = false,
                    b"w:tbl" if table_depth > 0 => table_depth -= 1,
                    b"w:p" if in_paragraph => {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                    b"w:t" => in_text = false,
                    b"w:instrText" => in_instr_text = false,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }
}
