//! Document model.
//!
//! The parser reduces a Word document to the one representation this crate
//! cares about: an ordered list of paragraph texts plus core metadata.

mod document;

pub use document::{Document, Metadata};
