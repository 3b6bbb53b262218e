use crossterm::event::{KeyCode, KeyEvent};

use crate::features::KeyOutcome;
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => tui.notes.select_next(),
        KeyCode::Char('k') | KeyCode::Up => tui.notes.select_prev(),
        KeyCode::Char('d') if !tui.notes.is_empty() => {
            let index = tui.notes.selected();
            if tui.config.confirm_note_delete {
                return KeyOutcome::overlay(OverlayRequest::DeleteConfirm { index });
            }
            tui.notes.delete(index);
        }
        _ => {}
    }
    KeyOutcome::none()
}
