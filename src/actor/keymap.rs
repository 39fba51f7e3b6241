//! Keymap: Turns input events into editor actions.
//!
//! Bindings follow the emacs-style defaults of the editor:
//!
//! | Key                  | Action            |
//! |----------------------|-------------------|
//! | Left / Ctrl-B        | cursor left       |
//! | Right / Ctrl-F       | cursor right      |
//! | Up / Ctrl-P          | cursor up         |
//! | Down / Ctrl-N        | cursor down       |
//! | Home / Ctrl-A        | start of line     |
//! | End / Ctrl-E         | end of line       |
//! | Enter                | split line        |
//! | Backspace / Ctrl-H   | delete backward   |
//! | Delete / Ctrl-D      | delete forward    |
//! | Ctrl-S               | save              |
//! | Ctrl-Q               | quit              |
//!
//! Printable ASCII inserts itself. Everything else is ignored.

use super::messages::{InputEvent, KeyCode, KeyModifiers};
use crate::edit::Command;

/// What the main loop should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply an editing command.
    Edit(Command),
    /// Write the document to disk.
    Save,
    /// Leave the editor.
    Quit,
    /// The terminal changed size.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

/// Map one input event to an action, or `None` if it is unbound.
pub fn map_event(event: &InputEvent) -> Option<Action> {
    match *event {
        InputEvent::Key { code, modifiers } => map_key(code, modifiers),
        InputEvent::Resize { width, height } => Some(Action::Resize { width, height }),
        InputEvent::Shutdown => Some(Action::Quit),
        InputEvent::Error(_) => None,
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.control {
        return match code {
            KeyCode::Char(c) => map_ctrl(c.to_ascii_lowercase()),
            _ => None,
        };
    }

    let command = match code {
        KeyCode::Char(c) if !modifiers.alt => Command::InsertChar(printable_byte(c)?),
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Home => Command::MoveBol,
        KeyCode::End => Command::MoveEol,
        KeyCode::Enter => Command::Enter,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Delete => Command::DeleteForward,
        _ => return None,
    };
    Some(Action::Edit(command))
}

fn map_ctrl(c: char) -> Option<Action> {
    let command = match c {
        'q' => return Some(Action::Quit),
        's' => return Some(Action::Save),
        'b' => Command::MoveLeft,
        'f' => Command::MoveRight,
        'p' => Command::MoveUp,
        'n' => Command::MoveDown,
        'a' => Command::MoveBol,
        'e' => Command::MoveEol,
        'h' => Command::Backspace,
        'd' => Command::DeleteForward,
        _ => return None,
    };
    Some(Action::Edit(command))
}

/// The byte for a printable ASCII character (space through `~`).
fn printable_byte(c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(|b| (b' '..=b'~').contains(b))
}
