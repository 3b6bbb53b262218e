use crossterm::event::{KeyCode, KeyEvent};

use crate::features::KeyOutcome;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => tui.vocabulary.select_next(),
        KeyCode::Char('k') | KeyCode::Up => tui.vocabulary.select_prev(),
        KeyCode::Char('d') => {
            if let Some(word) = tui.vocabulary.delete_selected() {
                tracing::debug!(word, "vocabulary entry deleted");
            }
        }
        _ => return KeyOutcome::none(),
    }
    tui.sync_viewports();
    KeyOutcome::none()
}

/// Moves the selection by `delta` entries (clamped).
pub fn scroll_selection(tui: &mut TuiState, delta: isize) {
    let target = tui.vocabulary.selected().saturating_add_signed(delta);
    tui.vocabulary.select(target);
    tui.sync_viewports();
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ltbr_core::vocabulary::Vocabulary;

    use super::*;
    use crate::state::test_support::tui;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state_with_words(words: &[&str]) -> TuiState {
        let (mut state, _) = tui(&["a"]);
        state.vocabulary = Vocabulary::from_words(words.iter().map(|w| w.to_string()).collect());
        state
    }

    #[test]
    fn test_selection_clamps() {
        let mut state = state_with_words(&["uno", "dos"]);
        handle_key(&mut state, make_key_event(KeyCode::Char('k')));
        assert_eq!(state.vocabulary.selected(), 0);
        for _ in 0..3 {
            handle_key(&mut state, make_key_event(KeyCode::Down));
        }
        assert_eq!(state.vocabulary.selected(), 1);
    }

    #[test]
    fn test_delete_last_entry_moves_selection_up() {
        let mut state = state_with_words(&["uno", "dos", "tres"]);
        state.vocabulary.select(2);
        handle_key(&mut state, make_key_event(KeyCode::Char('d')));
        assert_eq!(state.vocabulary.words(), &["uno", "dos"]);
        assert_eq!(state.vocabulary.selected(), 1);
    }

    #[test]
    fn test_delete_at_end_of_long_list_recenters_viewport() {
        let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut state = state_with_words(&refs);
        state.viewport_height = 10;
        scroll_selection(&mut state, 29);
        assert_eq!(state.vocab_offset, 20);

        handle_key(&mut state, make_key_event(KeyCode::Char('d')));
        assert_eq!(state.vocabulary.len(), 29);
        assert_eq!(state.vocabulary.selected(), 28);
        assert_eq!(state.vocab_offset, 19);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut state = state_with_words(&[]);
        handle_key(&mut state, make_key_event(KeyCode::Char('d')));
        assert!(state.vocabulary.is_empty());
        assert_eq!(state.vocabulary.selected(), 0);
    }

    #[test]
    fn test_scroll_selection_recenters_viewport() {
        let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut state = state_with_words(&refs);
        state.viewport_height = 10;

        scroll_selection(&mut state, 20);
        assert_eq!(state.vocabulary.selected(), 20);
        assert_eq!(state.vocab_offset, 15);

        scroll_selection(&mut state, 100);
        assert_eq!(state.vocabulary.selected(), 29);
        assert_eq!(state.vocab_offset, 20);
    }
}
