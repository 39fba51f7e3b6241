//! Terminal output: ANSI frame building, the document renderer and the
//! guard that restores the terminal.

mod guard;
mod output;
mod render;

pub(crate) use guard::TerminalGuard;
pub use output::{OutputBuffer, Rgb};
pub use render::{Renderer, StatusLine, Theme};
