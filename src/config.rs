//! Editor configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// File to load on startup and write on save.
    pub path: PathBuf,
    /// How long the input thread waits for an event before checking for shutdown.
    pub input_poll_timeout: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to paint trailing spaces and tabs with a highlight background.
    pub highlight_trailing_whitespace: bool,
    /// Whether to reserve the bottom row for a status line.
    pub status_line: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("untitled.txt"),
            input_poll_timeout: Duration::from_millis(100),
            alternate_screen: true,
            highlight_trailing_whitespace: true,
            status_line: true,
        }
    }
}

impl EditorConfig {
    /// Default configuration editing `path`.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }
}
