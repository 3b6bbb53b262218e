//! Link opener capability.

use anyhow::{Context, Result};

/// Opens URLs outside the terminal.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Launches the platform's default browser without waiting for it.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("Failed to open {url}"))
    }
}
