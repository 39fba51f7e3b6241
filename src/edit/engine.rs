//! `EditEngine`: Applies editing commands to a document.
//!
//! The engine owns the document, the cursor and the viewport. Every public
//! command runs to completion before returning and finishes by scrolling
//! the viewport to the cursor, so a reader between commands always sees a
//! consistent state.

use super::command::{Command, Edit};
use super::cursor::Cursor;
use crate::buffer::{Document, LineBuffer};
use crate::error::Result;
use crate::layout::Viewport;

/// The editing state of one open buffer.
#[derive(Debug, Clone)]
pub struct EditEngine {
    doc: Document,
    cursor: Cursor,
    viewport: Viewport,
}

impl EditEngine {
    /// Create an engine over an empty document.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_document(Document::new(), width, height)
    }

    /// Create an engine over an existing document.
    ///
    /// The cursor and viewport start at the origin.
    pub fn with_document(doc: Document, width: usize, height: usize) -> Result<Self> {
        Ok(Self { doc, cursor: Cursor::ORIGIN, viewport: Viewport::new(width, height)? })
    }

    /// Create an engine holding one row per input line.
    pub fn load<I, L>(lines: I, width: usize, height: usize) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let doc = Document::from_lines(lines)?;
        tracing::info!(rows = doc.row_count(), "loaded document");
        Self::with_document(doc, width, height)
    }

    /// The document being edited.
    #[inline]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    /// The current cursor.
    #[inline]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The current viewport.
    #[inline]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bytes of row `row`.
    pub fn row(&self, row: usize) -> Result<&[u8]> {
        self.doc.line(row).map(LineBuffer::as_bytes)
    }

    /// Rows inside the viewport, with their buffer row index.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &LineBuffer)> {
        let start = self.viewport.y_offset();
        let end = self.viewport.bottom().min(self.doc.row_count());
        (start..end).filter_map(move |row| self.doc.line(row).ok().map(|line| (row, line)))
    }

    /// Serialize the document, one entry per row.
    pub fn to_lines(&self) -> Vec<Vec<u8>> {
        self.doc.to_lines()
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Result<Edit> {
        match command {
            Command::InsertChar(byte) => self.insert_char(byte),
            Command::Enter => self.enter(),
            Command::Backspace => self.backspace(),
            Command::DeleteForward => self.delete_forward(),
            Command::MoveLeft => Ok(self.move_left()),
            Command::MoveRight => Ok(self.move_right()),
            Command::MoveUp => Ok(self.move_up()),
            Command::MoveDown => Ok(self.move_down()),
            Command::MoveBol => Ok(self.move_bol()),
            Command::MoveEol => Ok(self.move_eol()),
        }
    }

    /// Insert `byte` at the cursor and step past it.
    ///
    /// On an empty document this creates the first row.
    pub fn insert_char(&mut self, byte: u8) -> Result<Edit> {
        let (row, col) = self.cursor.position();
        self.doc.ensure_row(row)?;
        self.doc.line_mut(row)?.insert(col, byte)?;
        self.cursor.set(row, col + 1);
        self.adjust_viewport();
        Ok(Edit::Changed)
    }

    /// Split the current line at the cursor and move to the start of the new line.
    pub fn enter(&mut self) -> Result<Edit> {
        let (row, col) = self.cursor.position();
        if row >= self.doc.row_count() {
            self.doc.insert_row(self.doc.row_count(), LineBuffer::new())?;
            self.cursor.set(row, 0);
        } else {
            self.doc.split_row(row, col)?;
            self.cursor.set(row + 1, 0);
            tracing::debug!(row, col, "split line");
        }
        self.adjust_viewport();
        Ok(Edit::Changed)
    }

    /// Delete the byte before the cursor.
    ///
    /// At column 0 the current line is joined onto the previous one and the
    /// cursor lands at the join point.
    pub fn backspace(&mut self) -> Result<Edit> {
        let (row, col) = self.cursor.position();
        if row >= self.doc.row_count() {
            return Ok(self.finish(Edit::Unchanged));
        }

        let edit = if col > 0 {
            self.doc.line_mut(row)?.delete_at(col - 1)?;
            self.cursor.set(row, col - 1);
            Edit::Changed
        } else if row > 0 {
            let joined_at = self.doc.merge_rows(row - 1)?;
            self.cursor.set(row - 1, joined_at);
            tracing::debug!(row = row - 1, col = joined_at, "joined line with previous");
            Edit::Changed
        } else {
            Edit::Unchanged
        };
        Ok(self.finish(edit))
    }

    /// Delete the byte under the cursor.
    ///
    /// At the end of a line the next line is joined onto it; the cursor
    /// stays put.
    pub fn delete_forward(&mut self) -> Result<Edit> {
        let (row, col) = self.cursor.position();
        if row >= self.doc.row_count() {
            return Ok(self.finish(Edit::Unchanged));
        }

        let edit = if col < self.doc.line(row)?.len() {
            self.doc.line_mut(row)?.delete_at(col)?;
            Edit::Changed
        } else if row + 1 < self.doc.row_count() {
            self.doc.merge_rows(row)?;
            tracing::debug!(row, col, "joined line with next");
            Edit::Changed
        } else {
            Edit::Unchanged
        };
        Ok(self.finish(edit))
    }

    /// Move the cursor one column left.
    pub fn move_left(&mut self) -> Edit {
        let moved = self.cursor.move_left();
        self.finish(Edit::from_moved(moved))
    }

    /// Move the cursor one column right.
    pub fn move_right(&mut self) -> Edit {
        let moved = self.cursor.move_right(&self.doc);
        self.finish(Edit::from_moved(moved))
    }

    /// Move the cursor one row up.
    pub fn move_up(&mut self) -> Edit {
        let moved = self.cursor.move_up(&self.doc);
        tracing::trace!(row = self.cursor.row(), "move up");
        self.finish(Edit::from_moved(moved))
    }

    /// Move the cursor one row down.
    pub fn move_down(&mut self) -> Edit {
        let moved = self.cursor.move_down(&self.doc);
        tracing::trace!(row = self.cursor.row(), rows = self.doc.row_count(), "move down");
        self.finish(Edit::from_moved(moved))
    }

    /// Move the cursor to the start of the line.
    pub fn move_bol(&mut self) -> Edit {
        let moved = self.cursor.move_bol();
        self.finish(Edit::from_moved(moved))
    }

    /// Move the cursor to the end of the line.
    pub fn move_eol(&mut self) -> Edit {
        let moved = self.cursor.move_eol(&self.doc);
        self.finish(Edit::from_moved(moved))
    }

    /// Change the viewport size, e.g. after a terminal resize.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<Edit> {
        self.viewport
            .resize(width, height)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected viewport resize"))?;
        self.adjust_viewport();
        Ok(Edit::Moved)
    }

    /// Scroll after a command, upgrading `edit` if only the viewport moved.
    fn finish(&mut self, edit: Edit) -> Edit {
        let before = self.viewport;
        self.adjust_viewport();
        if matches!(edit, Edit::Unchanged) && self.viewport != before {
            Edit::Moved
        } else {
            edit
        }
    }

    /// Bring the cursor into view.
    fn adjust_viewport(&mut self) {
        self.cursor.clamp_col(&self.doc);
        let (row, col) = self.cursor.position();
        let rows = self.doc.row_count().max(row + 1);
        let line_len = self.doc.line_len_or_zero(row);
        self.viewport.scroll_to(row, col, rows, line_len);
    }
}
