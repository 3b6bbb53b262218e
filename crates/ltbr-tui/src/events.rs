//! UI events consumed by the reducer.
//!
//! Terminal input, the frame/tick cadence and the outcomes of executed
//! effects all arrive as `UiEvent`s.

use crossterm::event::Event;
use ltbr_core::reading::AccountingSnapshot;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic heartbeat (status message expiry).
    Tick,
    /// Current terminal size, delivered before the events of each loop pass.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),

    /// The progress store accepted a save.
    ProgressSaved {
        snapshot: AccountingSnapshot,
        quit: bool,
    },
    ProgressSaveFailed { error: String, quit: bool },

    ClipboardCopied { word: String },
    ClipboardFailed { error: String },
    BrowserFailed { error: String },
}
