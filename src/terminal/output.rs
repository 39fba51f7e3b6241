//! `OutputBuffer`: One frame of ANSI output, flushed with a single write.

use std::io::{self, Write};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Frame bytes for the editor screen.
///
/// The renderer accumulates a whole frame here so the terminal never shows
/// a half-drawn screen. Document bytes go through [`OutputBuffer::text`],
/// which keeps one terminal cell per byte.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create an empty frame with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    /// Start a new frame, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The frame so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write document bytes, one cell each.
    ///
    /// Tabs show as a space and anything outside printable ASCII as `?`, so
    /// a byte never moves the terminal cursor by more than one column.
    pub fn text(&mut self, bytes: &[u8]) {
        self.data.extend(bytes.iter().map(|&b| match b {
            b' '..=b'~' => b,
            b'\t' => b' ',
            _ => b'?',
        }));
    }

    /// Write `label` cut or space-padded to exactly `width` cells.
    pub fn padded(&mut self, label: &str, width: usize) {
        let mut cells = 0;
        for c in label.chars().take(width) {
            let mut utf8 = [0; 4];
            self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            cells += 1;
        }
        self.data.resize(self.data.len() + (width - cells), b' ');
    }

    /// Move the cursor to the zero-based cell `(x, y)`.
    #[inline]
    pub fn move_to(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
    }

    /// Show or hide the terminal cursor.
    #[inline]
    pub fn cursor_visible(&mut self, visible: bool) {
        self.data.extend_from_slice(if visible { b"\x1b[?25h" } else { b"\x1b[?25l" });
    }

    /// Set the foreground color.
    #[inline]
    pub fn fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set the background color.
    #[inline]
    pub fn bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Back to the terminal's default colors.
    #[inline]
    pub fn reset(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Blank the rest of the current row.
    #[inline]
    pub fn clear_to_eol(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Write the frame to `writer` in one call and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}
