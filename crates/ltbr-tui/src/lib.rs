//! Full-screen reader for ltbr.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod session;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
pub use session::{Capabilities, ReadingSession};
pub use state::{AppState, Document, TuiState};

/// How an interactive session ended.
#[derive(Debug, Default)]
pub struct ReaderOutcome {
    /// Error from the save attempted on quit, if it failed.
    pub save_error: Option<String>,
}

/// Runs the interactive reader until the user quits.
///
/// The terminal is restored before this returns, so callers can report
/// `save_error` on stderr.
pub fn run_reader(tui: TuiState, caps: Capabilities) -> Result<ReaderOutcome> {
    // The reader draws to stdout
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The reader requires a terminal.\n\
             Use `ltbr stats FILE` for non-interactive output."
        );
    }

    let session = ReadingSession::new(AppState::new(tui), caps);
    let mut runtime = TuiRuntime::new(session)?;
    tracing::info!(
        file = %runtime.session.state.tui.document.file_name,
        "reader started"
    );
    let result = runtime.run();
    let save_error = runtime.session.state.tui.exit_error.take();
    drop(runtime);

    result?;
    Ok(ReaderOutcome { save_error })
}
