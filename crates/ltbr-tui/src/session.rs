//! Reading session: the reducer plus the capabilities that execute its
//! effects.
//!
//! Events are processed strictly one at a time. Effect outcomes are queued
//! as follow-up events and reduced before `dispatch` returns, so the state
//! is settled whenever the caller renders.

use std::collections::VecDeque;

use ltbr_core::progress::ProgressStore;

use crate::common::{ClipboardWriter, LinkOpener};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update;

/// Side-effect capabilities injected into the session.
pub struct Capabilities {
    pub clipboard: Box<dyn ClipboardWriter>,
    pub links: Box<dyn LinkOpener>,
    pub progress: Box<dyn ProgressStore>,
}

pub struct ReadingSession {
    pub state: AppState,
    caps: Capabilities,
}

impl ReadingSession {
    pub fn new(state: AppState, caps: Capabilities) -> Self {
        Self { state, caps }
    }

    /// Reduces `event` and every event its effects produce.
    pub fn dispatch(&mut self, event: UiEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in update::update(&mut self.state, event) {
                if let Some(outcome) = self.execute_effect(effect) {
                    queue.push_back(outcome);
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.tui.should_quit
    }

    fn execute_effect(&mut self, effect: UiEffect) -> Option<UiEvent> {
        match effect {
            UiEffect::SaveProgress {
                key,
                entry,
                snapshot,
                quit,
            } => Some(match self.caps.progress.save(&key, &entry) {
                Ok(()) => UiEvent::ProgressSaved { snapshot, quit },
                Err(e) => {
                    let error = format!("{e:#}");
                    tracing::warn!(%error, "progress save failed");
                    UiEvent::ProgressSaveFailed { error, quit }
                }
            }),
            UiEffect::CopyToClipboard { text } => Some(match self.caps.clipboard.copy(&text) {
                Ok(()) => UiEvent::ClipboardCopied { word: text },
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard copy failed");
                    UiEvent::ClipboardFailed {
                        error: e.to_string(),
                    }
                }
            }),
            UiEffect::OpenBrowser { url } => match self.caps.links.open(&url) {
                Ok(()) => {
                    tracing::debug!(url, "opened link");
                    None
                }
                Err(e) => {
                    let error = format!("{e:#}");
                    tracing::warn!(%error, url, "browser launch failed");
                    Some(UiEvent::BrowserFailed { error })
                }
            },
        }
    }
}
