//! Commands accepted by the edit engine.

/// One editing command, as decoded by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Insert a byte at the cursor.
    InsertChar(u8),
    /// Split the line at the cursor.
    Enter,
    /// Delete the byte before the cursor, joining lines at column 0.
    Backspace,
    /// Delete the byte under the cursor, joining lines at end of line.
    DeleteForward,
    /// Cursor one column left.
    MoveLeft,
    /// Cursor one column right.
    MoveRight,
    /// Cursor one row up.
    MoveUp,
    /// Cursor one row down.
    MoveDown,
    /// Cursor to the start of the line.
    MoveBol,
    /// Cursor to the end of the line.
    MoveEol,
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// The document text changed.
    Changed,
    /// Only the cursor (and possibly the viewport) moved.
    Moved,
    /// Nothing changed.
    Unchanged,
}

impl Edit {
    /// Whether the document text changed.
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    /// Whether anything visible changed.
    pub const fn needs_redraw(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub(crate) const fn from_moved(moved: bool) -> Self {
        if moved {
            Self::Moved
        } else {
            Self::Unchanged
        }
    }
}
