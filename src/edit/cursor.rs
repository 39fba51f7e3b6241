//! Cursor: A `(row, col)` position in the document.
//!
//! Movement methods take the document they move over and keep the column
//! within the target line. They report whether the position changed.

use crate::buffer::Document;

/// A position in the document.
///
/// `col` never exceeds the length of line `row`. `row` equals the row count
/// only while the document is empty, and `col` is then 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// The top-left position.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Current row.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Current column (byte offset into the row).
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Position as a `(row, col)` pair.
    #[inline]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub(crate) const fn set(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    /// Move one column left.
    pub const fn move_left(&mut self) -> bool {
        if self.col > 0 {
            self.col -= 1;
            true
        } else {
            false
        }
    }

    /// Move one column right, stopping at the end of the line.
    pub fn move_right(&mut self, doc: &Document) -> bool {
        if self.row < doc.row_count() && self.col < doc.line_len_or_zero(self.row) {
            self.col += 1;
            true
        } else {
            false
        }
    }

    /// Move one row up, pulling the column back onto the shorter line.
    pub fn move_up(&mut self, doc: &Document) -> bool {
        let before = *self;
        if self.row > 0 {
            self.row -= 1;
        }
        self.clamp_col(doc);
        *self != before
    }

    /// Move one row down, never past the last row.
    pub fn move_down(&mut self, doc: &Document) -> bool {
        let before = *self;
        if self.row + 1 < doc.row_count() {
            self.row += 1;
        }
        self.clamp_col(doc);
        *self != before
    }

    /// Jump to the start of the line.
    pub const fn move_bol(&mut self) -> bool {
        let moved = self.col != 0;
        self.col = 0;
        moved
    }

    /// Jump to the end of the line.
    pub fn move_eol(&mut self, doc: &Document) -> bool {
        let end = doc.line_len_or_zero(self.row);
        let moved = self.col != end;
        self.col = end;
        moved
    }

    /// Pull the column back to the end of the current line if it overshoots.
    pub(crate) fn clamp_col(&mut self, doc: &Document) {
        self.col = self.col.min(doc.line_len_or_zero(self.row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines).unwrap()
    }

    #[test]
    fn test_cursor_left_right() {
        let d = doc(&["abc"]);
        let mut c = Cursor::ORIGIN;
        assert!(!c.move_left());
        assert!(c.move_right(&d));
        assert!(c.move_right(&d));
        assert!(c.move_right(&d));
        assert!(!c.move_right(&d));
        assert_eq!(c.position(), (0, 3));
        assert!(c.move_left());
        assert_eq!(c.col(), 2);
    }

    #[test]
    fn test_cursor_right_on_empty_document() {
        let d = Document::new();
        let mut c = Cursor::ORIGIN;
        assert!(!c.move_right(&d));
        assert!(!c.move_eol(&d));
        assert_eq!(c, Cursor::ORIGIN);
    }

    #[test]
    fn test_cursor_vertical_clamps_column() {
        let d = doc(&["long line", "ab", "another long one"]);
        let mut c = Cursor::ORIGIN;
        c.move_eol(&d);
        assert_eq!(c.col(), 9);

        assert!(c.move_down(&d));
        assert_eq!(c.position(), (1, 2));
        assert!(c.move_down(&d));
        assert_eq!(c.position(), (2, 2));
        assert!(!c.move_down(&d));
        assert!(c.move_up(&d));
        assert!(c.move_up(&d));
        assert!(!c.move_up(&d));
        assert_eq!(c.position(), (0, 2));
    }

    #[test]
    fn test_cursor_bol_eol() {
        let d = doc(&["hello"]);
        let mut c = Cursor::ORIGIN;
        assert!(!c.move_bol());
        assert!(c.move_eol(&d));
        assert_eq!(c.col(), 5);
        assert!(c.move_bol());
        assert_eq!(c.col(), 0);
    }
}
