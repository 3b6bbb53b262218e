//! Interactive reading.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use ltbr_core::Corpus;
use ltbr_core::clock::SystemClock;
use ltbr_core::config::{Config, paths};
use ltbr_core::progress::{JsonProgressStore, ProgressStore, document_key};
use ltbr_tui::common::{SystemBrowser, SystemClipboard};
use ltbr_tui::{Capabilities, Document, TuiState};

pub fn run(path: &Path, config: Config) -> Result<()> {
    let corpus = Corpus::load(path)?;
    let key = document_key(path)?;
    let store = JsonProgressStore::new(paths::progress_path()?);
    let saved = store.load(&key)?;
    tracing::info!(
        path = %path.display(),
        lines = corpus.line_count(),
        restored = saved.is_some(),
        "document loaded"
    );

    let document = Document {
        key,
        file_name: super::file_name(path),
        corpus,
    };
    let tui = TuiState::new(document, saved, config, Arc::new(SystemClock));
    let caps = Capabilities {
        clipboard: Box::new(SystemClipboard),
        links: Box::new(SystemBrowser),
        progress: Box::new(store),
    };

    let outcome = ltbr_tui::run_reader(tui, caps)?;
    if let Some(error) = outcome.save_error {
        eprintln!("Warning: progress was not saved: {error}");
    }
    Ok(())
}
