//! Terminal guard: Puts the terminal back however setup or the session ends.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Owns the terminal output while the editor runs.
///
/// Each setup step is recorded as it succeeds, and dropping the guard undoes
/// exactly those steps, so a failure halfway through setup still leaves the
/// terminal usable.
pub(crate) struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enable raw mode, optionally switch to the alternate screen, and hide
    /// the cursor.
    pub(crate) fn enter(out: W, alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { out, raw_mode: true, alternate_screen: false };
        guard.prepare_screen(alternate_screen)?;
        Ok(guard)
    }

    fn prepare_screen(&mut self, alternate_screen: bool) -> io::Result<()> {
        if alternate_screen {
            execute!(self.out, EnterAlternateScreen)?;
            self.alternate_screen = true;
        }
        execute!(self.out, cursor::Hide)
    }

    /// The terminal output, for drawing frames.
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(self.out, LeaveAlternateScreen);
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records writes and fails any write of `reject`.
    struct Recorder<'a> {
        written: &'a mut Vec<u8>,
        reject: &'static [u8],
    }

    impl Write for Recorder<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.starts_with(self.reject) {
                return Err(io::Error::other("terminal went away"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn without_raw_mode(out: Recorder<'_>) -> TerminalGuard<Recorder<'_>> {
        TerminalGuard { out, raw_mode: false, alternate_screen: false }
    }

    #[test]
    fn test_guard_undoes_partial_setup() {
        let mut written = Vec::new();
        {
            let mut guard = without_raw_mode(Recorder { written: &mut written, reject: b"\x1b[?25l" });
            assert!(guard.prepare_screen(true).is_err());
        }
        assert_eq!(written, b"\x1b[?1049h\x1b[?25h\x1b[?1049l");
    }

    #[test]
    fn test_guard_restores_after_full_setup() {
        let mut written = Vec::new();
        {
            let mut guard = without_raw_mode(Recorder { written: &mut written, reject: b"\x00" });
            guard.prepare_screen(false).unwrap();
            guard.out().write_all(b"frame").unwrap();
        }
        assert_eq!(written, b"\x1b[?25lframe\x1b[?25h");
    }
}
