//! Screen layout: Where the text area and the status line go.
//!
//! Recomputed on startup and on every terminal resize.

use super::rect::Rect;

/// The terminal divided into a text area and an optional status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Area showing document rows.
    pub text: Rect,
    /// Bottom row reserved for the status line, if enabled.
    pub status: Option<Rect>,
}

impl ScreenLayout {
    /// Lay out a terminal of `width` x `height` cells.
    ///
    /// The status line is dropped when the terminal is a single row tall,
    /// so the text area never collapses. Both text dimensions are at least 1.
    pub fn compute(width: u16, height: u16, status_line: bool) -> Self {
        let screen = Rect::from_size(width.max(1), height.max(1));
        if status_line && screen.height > 1 {
            let (text, status) = screen.split_vertical(screen.height - 1);
            Self { text, status: Some(status) }
        } else {
            Self { text: screen, status: None }
        }
    }

    /// Text area width in columns.
    pub fn text_width(&self) -> usize {
        usize::from(self.text.width)
    }

    /// Text area height in rows.
    pub fn text_height(&self) -> usize {
        usize::from(self.text.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_status_line() {
        let layout = ScreenLayout::compute(80, 24, true);
        assert_eq!(layout.text_height(), 23);
        assert_eq!(layout.status, Some(Rect::new(0, 23, 80, 1)));
    }

    #[test]
    fn test_layout_without_status_line() {
        let layout = ScreenLayout::compute(80, 24, false);
        assert_eq!(layout.text_height(), 24);
        assert!(layout.status.is_none());
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let layout = ScreenLayout::compute(0, 1, true);
        assert_eq!((layout.text_width(), layout.text_height()), (1, 1));
        assert!(layout.status.is_none());
    }
}
