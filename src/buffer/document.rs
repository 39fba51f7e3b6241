//! Document: The ordered collection of lines that makes up the text.

use super::growth;
use super::line::LineBuffer;
use crate::error::{EditError, Result};

/// An ordered, randomly indexable sequence of lines.
///
/// A document may hold zero rows; that is the state of a fresh buffer that
/// has never been typed into. Row insertion and removal shift the rows after
/// the affected index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<LineBuffer>,
}

impl Document {
    /// Create a document with no rows.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a document with one row per input line, in order.
    pub fn from_lines<I, L>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self::new();
        for line in lines {
            growth::reserve(&mut doc.lines, 1)?;
            doc.lines.push(LineBuffer::from_bytes(line.as_ref())?);
        }
        Ok(doc)
    }

    /// Number of live rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Allocated row capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Get the line at `row`.
    pub fn line(&self, row: usize) -> Result<&LineBuffer> {
        let len = self.lines.len();
        self.lines.get(row).ok_or(EditError::RowOutOfRange { row, len })
    }

    /// Get the line at `row` for modification.
    pub fn line_mut(&mut self, row: usize) -> Result<&mut LineBuffer> {
        let len = self.lines.len();
        self.lines.get_mut(row).ok_or(EditError::RowOutOfRange { row, len })
    }

    /// Length of the line at `row`, or 0 when the row does not exist.
    pub(crate) fn line_len_or_zero(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, LineBuffer::len)
    }

    /// Append empty rows until `row` is a live index.
    pub fn ensure_row(&mut self, row: usize) -> Result<()> {
        if row < self.lines.len() {
            return Ok(());
        }
        let missing = row + 1 - self.lines.len();
        growth::reserve(&mut self.lines, missing)?;
        self.lines.resize_with(row + 1, LineBuffer::new);
        tracing::trace!(rows = self.lines.len(), "materialized rows");
        Ok(())
    }

    /// Insert `line` so that it becomes row `row`.
    pub fn insert_row(&mut self, row: usize, line: LineBuffer) -> Result<()> {
        if row > self.lines.len() {
            return Err(EditError::RowOutOfRange { row, len: self.lines.len() });
        }
        growth::reserve(&mut self.lines, 1)?;
        self.lines.insert(row, line);
        Ok(())
    }

    /// Remove row `row` and hand it back to the caller.
    pub fn remove_row(&mut self, row: usize) -> Result<LineBuffer> {
        if row >= self.lines.len() {
            return Err(EditError::RowOutOfRange { row, len: self.lines.len() });
        }
        Ok(self.lines.remove(row))
    }

    /// Split row `row` at `col`, moving the tail into a new row below it.
    ///
    /// Capacity for the new row is reserved first, so a failure leaves the
    /// document unchanged.
    pub fn split_row(&mut self, row: usize, col: usize) -> Result<()> {
        let len = self.lines.len();
        if row >= len {
            return Err(EditError::RowOutOfRange { row, len });
        }
        growth::reserve(&mut self.lines, 1)?;
        let tail = self.lines[row].split(col)?;
        self.lines.insert(row + 1, tail);
        Ok(())
    }

    /// Join row `row + 1` onto the end of row `row` and drop it.
    ///
    /// Returns the length row `row` had before the join. The lower row is
    /// only removed once the append has succeeded.
    pub fn merge_rows(&mut self, row: usize) -> Result<usize> {
        let len = self.lines.len();
        if row + 1 >= len {
            return Err(EditError::RowOutOfRange { row: row + 1, len });
        }
        let (upper, lower) = self.lines.split_at_mut(row + 1);
        let target = &mut upper[row];
        let joined_at = target.len();
        target.append(&lower[0])?;
        self.lines.remove(row + 1);
        Ok(joined_at)
    }

    /// Iterate over the rows' bytes in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(LineBuffer::as_bytes)
    }

    /// Serialize to one byte vector per row, without newlines.
    pub fn to_lines(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}
