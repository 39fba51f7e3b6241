//! `sten`: A small terminal text editor.
//!
//! Usage: `sten [FILE]`. Ctrl-S saves, Ctrl-Q quits.

use clap::Parser;
use sten::{EditorConfig, Session, SessionError};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "sten", version, about = "A small terminal text editor")]
struct Args {
    /// File to edit. Created on first save if it does not exist.
    #[arg(default_value = "untitled.txt")]
    file: PathBuf,

    /// Where to write the log (the terminal is taken by the editor).
    #[arg(long, default_value = "sten.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Draw in the main screen instead of the alternate screen.
    #[arg(long)]
    no_alt_screen: bool,

    /// Do not highlight trailing whitespace.
    #[arg(long)]
    no_highlight: bool,

    /// Hide the status line.
    #[arg(long)]
    no_status_line: bool,
}

impl Args {
    fn to_config(&self) -> EditorConfig {
        EditorConfig {
            alternate_screen: !self.no_alt_screen,
            highlight_trailing_whitespace: !self.no_highlight,
            status_line: !self.no_status_line,
            ..EditorConfig::for_path(&self.file)
        }
    }
}

/// Send `tracing` output to `path`, truncating it first.
///
/// Logs are flushed when the returned guard is dropped.
fn init_logging(path: &std::path::Path, level: LevelFilter) -> std::io::Result<WorkerGuard> {
    let file = std::fs::File::create(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(guard)
}

fn main() -> Result<(), SessionError> {
    let args = Args::parse();
    let _log_guard = init_logging(&args.log_file, args.log_level)?;
    tracing::info!(file = %args.file.display(), "starting");

    let mut session = Session::start(args.to_config())?;
    let result = session.run();
    drop(session);

    if let Err(e) = &result {
        tracing::error!(error = %e, "session ended with an error");
    }
    result
}
