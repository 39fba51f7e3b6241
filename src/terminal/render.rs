//! Renderer: Paints the visible part of the document.
//!
//! Each frame is built in an [`OutputBuffer`] and flushed with one write.
//! The renderer only reads the engine; buffer coordinates become screen
//! coordinates by subtracting the viewport offsets.

use super::output::{OutputBuffer, Rgb};
use crate::edit::EditEngine;
use crate::layout::{Rect, ScreenLayout};
use std::io::{self, Write};

/// Colors used when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Background behind trailing whitespace.
    pub trailing_whitespace_bg: Rgb,
    /// Status line foreground.
    pub status_fg: Rgb,
    /// Status line background.
    pub status_bg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            trailing_whitespace_bg: Rgb::new(160, 40, 40),
            status_fg: Rgb::new(20, 20, 20),
            status_bg: Rgb::new(200, 200, 200),
        }
    }
}

/// What the status line shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Name of the file being edited.
    pub file_name: String,
    /// Whether there are unsaved changes.
    pub modified: bool,
    /// One-off message, e.g. the result of a save.
    pub message: Option<String>,
}

impl StatusLine {
    /// Format the status text for a cursor at `(row, col)`.
    pub fn text(&self, row: usize, col: usize) -> String {
        let mut text = format!(" {}", self.file_name);
        if self.modified {
            text.push_str(" [+]");
        }
        text.push_str(&format!("  {}:{}", row + 1, col + 1));
        if let Some(message) = &self.message {
            text.push_str("  ");
            text.push_str(message);
        }
        text
    }
}

/// Builds and flushes frames.
pub struct Renderer {
    output: OutputBuffer,
    theme: Theme,
    highlight_trailing_whitespace: bool,
}

impl Renderer {
    /// Create a renderer.
    pub fn new(theme: Theme, highlight_trailing_whitespace: bool) -> Self {
        Self {
            output: OutputBuffer::with_capacity(16 * 1024),
            theme,
            highlight_trailing_whitespace,
        }
    }

    /// Build a frame and return its bytes.
    pub fn frame(&mut self, engine: &EditEngine, layout: &ScreenLayout, status: &StatusLine) -> &[u8] {
        self.output.clear();
        self.output.cursor_visible(false);

        self.draw_text(engine, layout.text);
        if let Some(area) = layout.status {
            let (row, col) = engine.cursor().position();
            self.draw_status(area, &status.text(row, col));
        }

        let (row, col) = engine.cursor().position();
        if let Some((y, x)) = engine.viewport().to_screen(row, col) {
            if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
                self.output.move_to(layout.text.x + x, layout.text.y + y);
                self.output.cursor_visible(true);
            }
        }
        self.output.as_bytes()
    }

    /// Build a frame and write it to `writer`.
    pub fn draw<W: Write>(
        &mut self,
        engine: &EditEngine,
        layout: &ScreenLayout,
        status: &StatusLine,
        writer: &mut W,
    ) -> io::Result<()> {
        self.frame(engine, layout, status);
        self.output.flush_to(writer)
    }

    fn draw_text(&mut self, engine: &EditEngine, area: Rect) {
        let viewport = engine.viewport();
        let doc = engine.document();

        for screen_row in 0..area.height {
            self.output.move_to(area.x, area.y + screen_row);
            self.output.reset();

            let row = viewport.y_offset() + usize::from(screen_row);
            if let Ok(line) = doc.line(row) {
                let bytes = line.as_bytes();
                let start = viewport.x_offset().min(bytes.len());
                let end = viewport.right().min(bytes.len());
                let trailing = if self.highlight_trailing_whitespace {
                    line.trimmed_len().clamp(start, end)
                } else {
                    end
                };

                self.output.text(&bytes[start..trailing]);
                if trailing < end {
                    self.output.bg(self.theme.trailing_whitespace_bg);
                    self.output.text(&bytes[trailing..end]);
                    self.output.reset();
                }
            }
            self.output.clear_to_eol();
        }
    }

    fn draw_status(&mut self, area: Rect, text: &str) {
        self.output.move_to(area.x, area.y);
        self.output.fg(self.theme.status_fg);
        self.output.bg(self.theme.status_bg);
        self.output.padded(text, usize::from(area.width));
        self.output.reset();
    }
}
