//! Input handling: A polling thread plus the key map.
//!
//! The input actor owns the terminal's event stream and forwards events over
//! a bounded crossbeam channel. The editing loop stays single-threaded: it
//! receives one event, maps it to an [`Action`], applies it, redraws.
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │ ──▶ EditEngine
//! └──────────────┘                     └──────────────┘
//! ```

mod input;
mod keymap;
mod messages;

pub use input::InputActor;
pub use keymap::{map_event, Action};
pub use messages::{InputEvent, KeyCode, KeyModifiers};
