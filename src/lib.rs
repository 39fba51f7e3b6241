//! # Sten
//!
//! A small terminal text editor built around a byte-oriented text buffer.
//!
//! The core is the buffer engine: lines of raw bytes, a cursor that always
//! points at a valid position, and a viewport that scrolls to follow it.
//! Around it sit a thin terminal front end (input thread, key map, renderer)
//! and plain newline-delimited file I/O.
//!
//! ## Core Concepts
//!
//! - **`LineBuffer`**: one line's bytes, grown by doubling
//! - **`Document`**: the ordered rows, possibly none
//! - **`Cursor`**: a `(row, col)` kept inside the document
//! - **`Viewport`**: the visible window, recomputed after every command
//! - **`EditEngine`**: applies one [`Command`] at a time, atomically
//!
//! ## Example
//!
//! ```rust
//! use sten::{Command, EditEngine};
//!
//! let mut engine = EditEngine::new(80, 24)?;
//! for b in *b"hello" {
//!     engine.apply(Command::InsertChar(b))?;
//! }
//! engine.apply(Command::Enter)?;
//!
//! assert_eq!(engine.to_lines(), vec![b"hello".to_vec(), Vec::new()]);
//! assert_eq!(engine.cursor().position(), (1, 0));
//! # Ok::<(), sten::EditError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod edit;
pub mod error;
pub mod io;
pub mod layout;
pub mod session;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Document, LineBuffer};
pub use config::EditorConfig;
pub use edit::{Command, Cursor, Edit, EditEngine};
pub use error::{EditError, ErrorKind, Result, SessionError};
pub use layout::Viewport;
pub use session::{Editor, Session};
