//! Viewport: The visible window over the document.

use crate::error::{EditError, Result};
use std::fmt;

/// The rectangle of buffer coordinates currently on screen.
///
/// `x_offset`/`y_offset` are the buffer column and row shown in the
/// top-left cell. Width and height are always at least 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    x_offset: usize,
    y_offset: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    /// Create a viewport at the origin with the given size.
    pub const fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditError::EmptyViewport { width, height });
        }
        Ok(Self { x_offset: 0, y_offset: 0, width, height })
    }

    /// First visible buffer column.
    #[inline]
    pub const fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// First visible buffer row.
    #[inline]
    pub const fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// One past the last visible row.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y_offset.saturating_add(self.height)
    }

    /// One past the last visible column.
    #[inline]
    pub const fn right(&self) -> usize {
        self.x_offset.saturating_add(self.width)
    }

    /// Check if buffer position `(row, col)` is on screen.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.y_offset && row < self.bottom() && col >= self.x_offset && col < self.right()
    }

    /// Translate a buffer position to screen coordinates.
    ///
    /// Returns `None` when the position is scrolled out of view.
    pub const fn to_screen(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if self.contains(row, col) {
            Some((row - self.y_offset, col - self.x_offset))
        } else {
            None
        }
    }

    /// Change the dimensions, keeping the offsets.
    ///
    /// Callers must scroll afterwards to bring the cursor back into view.
    pub(crate) const fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EditError::EmptyViewport { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Scroll so that `(row, col)` is visible.
    ///
    /// `rows` is the number of rows the cursor can reach and `line_len` the
    /// length of the cursor's line. An axis whose whole extent fits on
    /// screen is pinned to offset 0.
    pub(crate) const fn scroll_to(&mut self, row: usize, col: usize, rows: usize, line_len: usize) {
        if row < self.y_offset {
            self.y_offset = row;
        } else if row >= self.bottom() {
            self.y_offset = row + 1 - self.height;
        }
        if rows <= self.height {
            self.y_offset = 0;
        }

        if col < self.x_offset {
            self.x_offset = col;
        } else if col >= self.right() {
            self.x_offset = col + 1 - self.width;
        }
        if line_len < self.width {
            self.x_offset = 0;
        }
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(+{}+{} {}x{})",
            self.x_offset, self.y_offset, self.width, self.height
        )
    }
}
