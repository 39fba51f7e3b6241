//! Buffer module: Line storage for the text being edited.
//!
//! This module contains:
//! - [`LineBuffer`]: The bytes of one line
//! - [`Document`]: The ordered rows of the whole text
//! - [`growth`]: The doubling capacity policy both of them share

mod document;
mod line;
pub mod growth;

pub use document::Document;
pub use line::LineBuffer;
