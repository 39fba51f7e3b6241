//! Layout module: Screen geometry and the scrolling viewport.
//!
//! [`ScreenLayout`] is computed once at startup and again on terminal
//! resize. [`Viewport`] is recomputed after every editing command.

mod rect;
mod screen;
mod viewport;

pub use rect::Rect;
pub use screen::ScreenLayout;
pub use viewport::Viewport;
