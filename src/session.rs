//! Session: The interactive editing loop.
//!
//! [`Editor`] holds everything that does not touch the terminal (engine,
//! layout, status, file path) and reacts to [`Action`]s. [`Session`] adds
//! the terminal: raw mode, the input thread and the renderer.

use crate::actor::{map_event, Action, InputActor, InputEvent};
use crate::config::EditorConfig;
use crate::edit::EditEngine;
use crate::error::SessionError;
use crate::io::{read_lines, write_lines};
use crate::layout::ScreenLayout;
use crate::terminal::{Renderer, StatusLine, TerminalGuard, Theme};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use crossterm::terminal;
use std::io::{self, Stdout};

/// Editing state plus the bits of UI state that go with it.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    engine: EditEngine,
    layout: ScreenLayout,
    status: StatusLine,
    running: bool,
}

impl Editor {
    /// Load the configured file for a terminal of `width` x `height`.
    pub fn open(config: EditorConfig, width: u16, height: u16) -> Result<Self, SessionError> {
        let lines = read_lines(&config.path)?;
        let layout = ScreenLayout::compute(width, height, config.status_line);
        let engine = EditEngine::load(lines, layout.text_width(), layout.text_height())?;
        let status = StatusLine {
            file_name: config.path.display().to_string(),
            ..StatusLine::default()
        };
        Ok(Self { config, engine, layout, status, running: true })
    }

    /// The edit engine.
    pub const fn engine(&self) -> &EditEngine {
        &self.engine
    }

    /// Current screen layout.
    pub const fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Current status line contents.
    pub const fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Whether the editor should keep running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether there are unsaved changes.
    pub const fn is_modified(&self) -> bool {
        self.status.modified
    }

    /// React to one action. Returns whether the screen needs a redraw.
    pub fn handle(&mut self, action: Action) -> Result<bool, SessionError> {
        match action {
            Action::Edit(command) => {
                let edit = self.engine.apply(command)?;
                if edit.is_changed() {
                    self.status.modified = true;
                }
                if edit.needs_redraw() {
                    self.status.message = None;
                }
                Ok(edit.needs_redraw())
            }
            Action::Save => {
                self.save();
                Ok(true)
            }
            Action::Quit => {
                tracing::info!(modified = self.status.modified, "quit");
                self.running = false;
                Ok(false)
            }
            Action::Resize { width, height } => {
                self.layout = ScreenLayout::compute(width, height, self.config.status_line);
                self.engine.resize(self.layout.text_width(), self.layout.text_height())?;
                tracing::debug!(width, height, "resized");
                Ok(true)
            }
        }
    }

    /// Write the document to the configured path.
    ///
    /// A failed save is reported on the status line and does not end the
    /// session.
    pub fn save(&mut self) {
        match write_lines(&self.config.path, self.engine.document().rows()) {
            Ok(count) => {
                self.status.modified = false;
                self.status.message = Some(format!("wrote {count} lines"));
            }
            Err(e) => {
                tracing::error!(path = %self.config.path.display(), error = %e, "could not save file");
                self.status.message = Some(format!("could not save file: {e}"));
            }
        }
    }
}

/// An editor attached to the terminal.
pub struct Session {
    editor: Editor,
    renderer: Renderer,
    input_rx: Receiver<InputEvent>,
    input_actor: Option<InputActor>,
    terminal: TerminalGuard<Stdout>,
}

impl Session {
    /// Open the configured file and take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or terminal setup fails.
    pub fn start(config: EditorConfig) -> Result<Self, SessionError> {
        let (width, height) = terminal::size()?;
        let editor = Editor::open(config, width, height)?;
        let poll_timeout = editor.config.input_poll_timeout;
        let renderer = Renderer::new(Theme::default(), editor.config.highlight_trailing_whitespace);
        let terminal = TerminalGuard::enter(io::stdout(), editor.config.alternate_screen)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let input_actor = InputActor::spawn(input_tx, poll_timeout);
        tracing::info!(width, height, "session started");

        Ok(Self {
            editor,
            renderer,
            input_rx,
            input_actor: Some(input_actor),
            terminal,
        })
    }

    /// The editor state.
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run until the user quits or the input thread goes away.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails or the engine rejects a command.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.redraw()?;
        let timeout = self.editor.config.input_poll_timeout;

        while self.editor.is_running() {
            let event = match self.input_rx.recv_timeout(timeout) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };
            if let InputEvent::Error(message) = &event {
                tracing::warn!(%message, "input error");
            }
            let Some(action) = map_event(&event) else {
                continue;
            };
            if self.editor.handle(action)? {
                self.redraw()?;
            }
        }
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.renderer.draw(
            &self.editor.engine,
            &self.editor.layout,
            &self.editor.status,
            self.terminal.out(),
        )
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // The terminal guard is dropped after this, once input has stopped.
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
    }
}
