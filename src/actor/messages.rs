//! Message types sent from the input thread to the main loop.

/// Key codes for keyboard input.
///
/// The subset of crossterm's `KeyCode` that the editor acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Delete key.
    Delete,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self { control: false, alt: false };

    /// Only Control held.
    pub const CONTROL: Self = Self { control: true, alt: false };
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl InputEvent {
    /// A key press with no modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key { code, modifiers: KeyModifiers::NONE }
    }

    /// A key press with Control held.
    pub const fn ctrl(c: char) -> Self {
        Self::Key { code: KeyCode::Char(c), modifiers: KeyModifiers::CONTROL }
    }
}
