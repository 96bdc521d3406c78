//! Document model structures.

use serde::{Deserialize, Serialize};

/// Document core properties extracted from `docProps/core.xml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Creation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// A parsed Word document: ordered paragraph texts plus metadata.
///
/// A paragraph is the text of one body-level `w:p` element; it may be empty.
/// Paragraphs inside tables are not part of the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Paragraph texts in document order.
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Core properties; empty when `docProps/core.xml` is absent.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph text.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// The document's plain text: paragraph texts joined with `\n`.
    ///
    /// The join is exact — empty paragraphs become empty lines, nothing is
    /// trimmed, and there is no trailing newline. A document with zero
    /// paragraphs yields the empty string.
    pub fn plain_text(&self) -> String {
        self.paragraphs.join("\n")
    }
}
