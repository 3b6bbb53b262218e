//! Overlay modules for the reader.
//!
//! Overlays are modal dialogs that take over keyboard input while open.
//! Only one can be active at a time since `AppState::overlay` is a single
//! `Option<Overlay>`. Each overlay owns its state, key handler and render
//! function.
//!
//! ## Module Structure
//!
//! - `help.rs`: Key binding reference (`?`)
//! - `search.rs`: Search prompt (`/`)
//! - `goto_line.rs`: Goto-line prompt (`g`)
//! - `note_editor.rs`: Multi-line note editor (Ctrl+N)
//! - `link_picker.rs`: Dictionary/community lookup picker (`o`)
//! - `delete_confirm.rs`: Yes/No confirmation before deleting a note
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod delete_confirm;
pub mod goto_line;
pub mod help;
pub mod link_picker;
pub mod note_editor;
pub mod render_utils;
pub mod search;

use crossterm::event::KeyEvent;
pub use delete_confirm::DeleteConfirmState;
pub use goto_line::GotoLineState;
pub use help::HelpState;
pub use link_picker::LinkPickerState;
pub use note_editor::NoteEditorState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use search::SearchInputState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open an overlay, produced by the tab key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    Help,
    Search,
    GotoLine,
    NoteEditor,
    LinkPicker,
    DeleteConfirm { index: usize },
}

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help(HelpState),
    Search(SearchInputState),
    GotoLine(GotoLineState),
    NoteEditor(NoteEditorState),
    LinkPicker(LinkPickerState),
    DeleteConfirm(DeleteConfirmState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::Help => Overlay::Help(HelpState),
            OverlayRequest::Search => Overlay::Search(SearchInputState::default()),
            OverlayRequest::GotoLine => Overlay::GotoLine(GotoLineState::default()),
            OverlayRequest::NoteEditor => Overlay::NoteEditor(NoteEditorState::new()),
            OverlayRequest::LinkPicker => Overlay::LinkPicker(LinkPickerState::default()),
            OverlayRequest::DeleteConfirm { index } => {
                Overlay::DeleteConfirm(DeleteConfirmState::new(index))
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Help(h) => h.render(frame, area),
            Overlay::Search(s) => s.render(frame, area),
            Overlay::GotoLine(g) => g.render(frame, area),
            Overlay::NoteEditor(n) => n.render(frame, area),
            Overlay::LinkPicker(p) => p.render(frame, area),
            Overlay::DeleteConfirm(d) => d.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Help(h) => h.handle_key(key),
            Overlay::Search(s) => s.handle_key(key),
            Overlay::GotoLine(g) => g.handle_key(tui, key),
            Overlay::NoteEditor(n) => n.handle_key(key),
            Overlay::LinkPicker(p) => p.handle_key(tui, key),
            Overlay::DeleteConfirm(d) => d.handle_key(key),
        }
    }
}

/// Routes a key to the active overlay, if any.
///
/// Returns `None` when no overlay is open so the caller can fall through to
/// the tab key handlers.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|o| o.handle_key(tui, key))
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
