//! UI effect types.
//!
//! Effects are commands returned by the reducer that the session executes.
//! The reducer never touches the clipboard, the browser or the disk itself.

use ltbr_core::progress::ProgressEntry;
use ltbr_core::reading::AccountingSnapshot;

#[derive(Debug, Clone)]
pub enum UiEffect {
    /// Write the progress record for the open document.
    ///
    /// `snapshot` holds the session counters folded into `entry`, so they
    /// can be moved into the totals once the write succeeds.
    SaveProgress {
        key: String,
        entry: ProgressEntry,
        snapshot: AccountingSnapshot,
        quit: bool,
    },

    /// Copy a word to the system clipboard.
    CopyToClipboard { text: String },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
