//! `LineBuffer`: Byte storage for a single line of text.

use super::growth;
use crate::error::{EditError, Result};
use std::fmt;

/// One line of text as raw bytes.
///
/// There is no terminator; `len()` is exactly the number of bytes on the
/// line. Capacity grows by doubling and never shrinks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<u8>,
}

impl LineBuffer {
    /// Create an empty line with no storage.
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Create a line holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut line = Self::new();
        growth::reserve(&mut line.chars, bytes.len())?;
        line.chars.extend_from_slice(bytes);
        Ok(line)
    }

    /// Number of bytes on the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the line has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Allocated capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// The line's bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Insert `byte` before position `pos`.
    pub fn insert(&mut self, pos: usize, byte: u8) -> Result<()> {
        self.check_pos(pos)?;
        growth::reserve(&mut self.chars, 1)?;
        self.chars.insert(pos, byte);
        Ok(())
    }

    /// Remove the byte at `pos`, returning it.
    pub fn delete_at(&mut self, pos: usize) -> Result<u8> {
        if pos >= self.len() {
            return Err(EditError::ColumnOutOfRange { col: pos, len: self.len() });
        }
        Ok(self.chars.remove(pos))
    }

    /// Split the line at `pos`.
    ///
    /// Returns a new line holding `[pos, len)` and truncates `self` to `pos`.
    /// `self` is untouched if the new line cannot be allocated.
    pub fn split(&mut self, pos: usize) -> Result<Self> {
        self.check_pos(pos)?;
        let tail = Self::from_bytes(&self.chars[pos..])?;
        self.chars.truncate(pos);
        Ok(tail)
    }

    /// Copy `other`'s bytes onto the end of this line.
    pub fn append(&mut self, other: &Self) -> Result<()> {
        growth::reserve(&mut self.chars, other.len())?;
        self.chars.extend_from_slice(&other.chars);
        Ok(())
    }

    /// Length of the line with trailing spaces and tabs removed.
    pub fn trimmed_len(&self) -> usize {
        self.chars
            .iter()
            .rposition(|b| !matches!(b, b' ' | b'\t'))
            .map_or(0, |i| i + 1)
    }

    fn check_pos(&self, pos: usize) -> Result<()> {
        if pos > self.len() {
            return Err(EditError::ColumnOutOfRange { col: pos, len: self.len() });
        }
        Ok(())
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineBuffer({:?})", String::from_utf8_lossy(&self.chars))
    }
}
