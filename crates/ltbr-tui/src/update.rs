//! Reader reducer (update function).
//!
//! All state mutations happen here. The session calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ltbr_core::search::SearchState;
use ratatui::layout::Position;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{self, KeyOutcome};
use crate::mutations::StateMutation;
use crate::overlays::{self, Overlay, OverlayRequest, OverlayTransition};
use crate::render;
use crate::state::{AppState, Tab, TuiState};

/// Lines (or vocabulary entries) moved per mouse wheel notch.
const MOUSE_SCROLL_STEP: isize = 3;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the session to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.expire_status();
            vec![]
        }
        UiEvent::Frame { height, .. } => {
            app.tui.viewport_height = render::content_height(height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ProgressSaved { snapshot, quit } => {
            app.tui.accounting.commit_saved(snapshot);
            if quit {
                app.tui.should_quit = true;
            } else {
                app.tui.set_status("Progress saved");
            }
            vec![]
        }
        UiEvent::ProgressSaveFailed { error, quit } => {
            if quit {
                app.tui.exit_error = Some(error);
                app.tui.should_quit = true;
            } else {
                app.tui.set_error(format!("Save failed: {error}"));
            }
            vec![]
        }
        UiEvent::ClipboardCopied { word } => {
            app.tui.set_status(format!("Copied '{word}'"));
            app.tui.last_copied_word = Some(word);
            vec![]
        }
        UiEvent::ClipboardFailed { error } => {
            app.tui.set_error(format!("Copy failed: {error}"));
            vec![]
        }
        UiEvent::BrowserFailed { error } => {
            app.tui.set_error(format!("Could not open browser: {error}"));
            vec![]
        }
    };

    // Cursor moves, resizes and list mutations all funnel through here.
    app.tui.sync_viewports();
    effects
}

/// Builds the save effect for the current session.
fn save_progress(tui: &TuiState, quit: bool) -> UiEffect {
    UiEffect::SaveProgress {
        key: tui.document.key.clone(),
        entry: tui.progress_entry(),
        snapshot: tui.accounting.snapshot(),
        quit,
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::GotoLine(line) => jump_to_line(tui, line),
            StateMutation::Search(term) => {
                tui.search = SearchState::run(tui.corpus().lines(), tui.current_line, &term);
                match tui.search.current_line() {
                    Some(line) => jump_to_line(tui, line),
                    None => tui.set_status(format!("No matches for '{}'", tui.search.term)),
                }
            }
            StateMutation::AddNote(text) => {
                if tui.notes.add(&text) {
                    tui.set_status("Note added");
                }
            }
            StateMutation::DeleteNote(index) => {
                if tui.notes.delete(index).is_some() {
                    tui.set_status("Note deleted");
                }
            }
        }
    }
}

/// Non-sequential line jump: moves the cursor and refreshes the last action
/// time without crediting any reading.
fn jump_to_line(tui: &mut TuiState, line: usize) {
    tui.accounting.touch(tui.clock.now());
    tui.set_line(line);
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    if update.transition == OverlayTransition::Close {
        app.overlay = None;
    }
    update.effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) {
    if app.overlay.is_none() {
        app.overlay = Some(Overlay::open(request));
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        // The next `Frame` event carries the new size.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    let outcome = match handle_global_key(&mut app.tui, key) {
        Some(outcome) => outcome,
        None => match app.tui.tab {
            Tab::Text => features::reader::handle_key(&mut app.tui, key),
            Tab::Vocabulary => features::vocabulary::handle_key(&mut app.tui, key),
            Tab::Notes => features::notes::handle_key(&mut app.tui, key),
            Tab::Statistics => KeyOutcome::none(),
        },
    };

    if let Some(request) = outcome.overlay {
        open_overlay_request(app, request);
    }
    outcome.effects
}

/// Keys that work the same on every tab, plus every Ctrl chord. Returns
/// `None` when the key is left to the active tab.
fn handle_global_key(tui: &mut TuiState, key: KeyEvent) -> Option<KeyOutcome> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let outcome = match key.code {
        KeyCode::Char('c') if ctrl => KeyOutcome::effect(save_progress(tui, true)),
        KeyCode::Char('n') if ctrl => KeyOutcome::overlay(OverlayRequest::NoteEditor),
        // Unbound chords never reach the plain-key tab handlers
        _ if ctrl => KeyOutcome::none(),
        KeyCode::Char('q') => KeyOutcome::effect(save_progress(tui, true)),
        KeyCode::Char('s') => KeyOutcome::effect(save_progress(tui, false)),
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            tui.switch_tab(Tab::ALL[index]);
            KeyOutcome::none()
        }
        KeyCode::Char('?') => KeyOutcome::overlay(OverlayRequest::Help),
        KeyCode::Char('o') => KeyOutcome::overlay(OverlayRequest::LinkPicker),
        KeyCode::Char('n') => {
            if let Some(line) = tui.search.next() {
                jump_to_line(tui, line);
            }
            KeyOutcome::none()
        }
        KeyCode::Char('N') => {
            if let Some(line) = tui.search.prev() {
                jump_to_line(tui, line);
            }
            KeyOutcome::none()
        }
        _ => return None,
    };
    Some(outcome)
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay.is_some() {
        return;
    }
    let tui = &mut app.tui;
    let delta = match mouse.kind {
        MouseEventKind::ScrollDown => MOUSE_SCROLL_STEP,
        MouseEventKind::ScrollUp => -MOUSE_SCROLL_STEP,
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            let clicked = tui
                .tab_areas
                .get()
                .iter()
                .position(|area| area.contains(position));
            if let Some(index) = clicked {
                tui.switch_tab(Tab::ALL[index]);
            }
            return;
        }
        _ => return,
    };

    match tui.tab {
        Tab::Text => features::reader::scroll_lines(tui, delta),
        Tab::Vocabulary => features::vocabulary::scroll_selection(tui, delta),
        Tab::Notes | Tab::Statistics => {}
    }
}
