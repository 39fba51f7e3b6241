//! Error types for the text buffer engine and the editor front end.

use std::collections::TryReserveError;
use std::io;

/// Broad classification of an [`EditError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Growing a line or the row array failed. Not recoverable.
    ResourceExhausted,
    /// The caller passed a row, column or dimension outside the valid range.
    ContractViolation,
}

/// Errors reported by the buffer engine.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// An allocation needed to grow storage could not be satisfied.
    #[error("could not grow storage to {requested} elements")]
    ResourceExhausted {
        /// Capacity that was being requested.
        requested: usize,
        /// Allocator failure, absent when the size computation itself overflowed.
        #[source]
        source: Option<TryReserveError>,
    },

    /// A row index is outside `0..len` (or `0..=len` for insertion).
    #[error("row {row} is out of range for a document of {len} rows")]
    RowOutOfRange {
        /// Offending row.
        row: usize,
        /// Number of rows at the time of the call.
        len: usize,
    },

    /// A column is outside the current line.
    #[error("column {col} is out of range for a line of {len} bytes")]
    ColumnOutOfRange {
        /// Offending column.
        col: usize,
        /// Line length at the time of the call.
        len: usize,
    },

    /// A viewport needs at least one row and one column.
    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

impl EditError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            Self::RowOutOfRange { .. }
            | Self::ColumnOutOfRange { .. }
            | Self::EmptyViewport { .. } => ErrorKind::ContractViolation,
        }
    }

    /// Whether the process should stop rather than carry on editing.
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::ResourceExhausted)
    }
}

/// Result alias for buffer engine operations.
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors that end an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Terminal setup, rendering or file access failed.
    #[error("terminal or file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The buffer engine rejected an operation.
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let exhausted = EditError::ResourceExhausted { requested: 16, source: None };
        assert_eq!(exhausted.kind(), ErrorKind::ResourceExhausted);
        assert!(exhausted.is_fatal());

        let row = EditError::RowOutOfRange { row: 4, len: 2 };
        assert_eq!(row.kind(), ErrorKind::ContractViolation);
        assert!(!row.is_fatal());

        let viewport = EditError::EmptyViewport { width: 0, height: 3 };
        assert_eq!(viewport.kind(), ErrorKind::ContractViolation);
    }

    #[test]
    fn test_error_messages() {
        let err = EditError::ColumnOutOfRange { col: 9, len: 3 };
        assert_eq!(err.to_string(), "column 9 is out of range for a line of 3 bytes");

        let session: SessionError = err.into();
        assert_eq!(session.to_string(), "column 9 is out of range for a line of 3 bytes");
    }
}
