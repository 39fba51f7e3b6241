//! Edit module: Cursor movement and the editing operations.
//!
//! [`EditEngine`] is the only thing that mutates the document. The input
//! layer hands it one [`Command`] at a time; the renderer reads it between
//! commands.

mod command;
mod cursor;
mod engine;

pub use command::{Command, Edit};
pub use cursor::Cursor;
pub use engine::EditEngine;
