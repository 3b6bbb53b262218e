//! Search prompt overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::OverlayUpdate;
use crate::mutations::StateMutation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInputState {
    pub input: String,
}

impl SearchInputState {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_search_overlay(frame, self, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Enter => {
                if self.input.is_empty() {
                    return OverlayUpdate::close();
                }
                OverlayUpdate::close()
                    .with_mutations(vec![StateMutation::Search(std::mem::take(&mut self.input))])
            }
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_search_overlay(frame: &mut Frame, state: &SearchInputState, area: Rect) {
    use super::render_utils::{
        InputHint, InputLine, OverlayConfig, render_input_line, render_overlay,
    };

    let hints = [
        InputHint::new("Enter", "search"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Search",
            border_color: Color::Cyan,
            width: 50,
            height: 4,
            hints: &hints,
        },
    );

    let input_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &state.input,
            placeholder: Some("Text to find..."),
            prompt: "/ ",
            color: Color::Cyan,
        },
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::overlays::OverlayTransition;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(state: &mut SearchInputState, text: &str) {
        for c in text.chars() {
            state.handle_key(make_key_event(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_search() {
        let mut state = SearchInputState::default();
        type_text(&mut state, "Foo");
        let update = state.handle_key(make_key_event(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(update.mutations, vec![StateMutation::Search("Foo".into())]);
    }

    #[test]
    fn test_empty_enter_closes_without_search() {
        let mut state = SearchInputState::default();
        let update = state.handle_key(make_key_event(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut state = SearchInputState::default();
        type_text(&mut state, "ab");
        state.handle_key(make_key_event(KeyCode::Backspace));
        assert_eq!(state.input, "a");

        let update = state.handle_key(make_key_event(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }
}
