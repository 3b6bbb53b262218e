//! Lookup picker: opens the word under the cursor in a dictionary or a
//! reading community search.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ltbr_core::links::LinkTarget;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState};

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPickerState {
    pub selected: usize,
}

impl LinkPickerState {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_link_picker(frame, self, area);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < LinkTarget::ALL.len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let Some(target) = LinkTarget::ALL.get(self.selected) else {
                    return OverlayUpdate::close();
                };
                let word = tui.current_word_text().unwrap_or_default();
                OverlayUpdate::close().with_ui_effects(vec![UiEffect::OpenBrowser {
                    url: target.url_for(word),
                }])
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_link_picker(frame: &mut Frame, picker: &LinkPickerState, area: Rect) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let hints = [
        InputHint::new("↑↓", "navigate"),
        InputHint::new("Enter", "open"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Look up",
            border_color: Color::Magenta,
            width: 40,
            height: LinkTarget::ALL.len() as u16 + 3,
            hints: &hints,
        },
    );

    let items: Vec<ListItem> = LinkTarget::ALL
        .iter()
        .map(|target| ListItem::new(Line::from(target.label())))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected));
    frame.render_stateful_widget(list, layout.body, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::overlays::OverlayTransition;
    use crate::state::test_support::tui;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn opened_url(update: &OverlayUpdate) -> Option<&str> {
        update.effects.iter().find_map(|e| match e {
            UiEffect::OpenBrowser { url } => Some(url.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_enter_opens_dictionary_for_current_word() {
        let (mut state, _) = tui(&["En un lugar, de la Mancha"]);
        state.current_word = 2;
        let mut picker = LinkPickerState::default();
        let update = picker.handle_key(&state, make_key_event(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(opened_url(&update), Some("https://dle.rae.es/lugar"));
    }

    #[test]
    fn test_down_selects_community_search() {
        let (state, _) = tui(&["niño"]);
        let mut picker = LinkPickerState::default();
        picker.handle_key(&state, make_key_event(KeyCode::Down));
        picker.handle_key(&state, make_key_event(KeyCode::Down));
        assert_eq!(picker.selected, 1);
        let update = picker.handle_key(&state, make_key_event(KeyCode::Enter));
        assert_eq!(
            opened_url(&update),
            Some("https://www.goodreads.com/search?q=ni%C3%B1o")
        );
    }

    #[test]
    fn test_empty_line_still_opens_link() {
        let (state, _) = tui(&[""]);
        let mut picker = LinkPickerState::default();
        let update = picker.handle_key(&state, make_key_event(KeyCode::Enter));
        assert_eq!(opened_url(&update), Some("https://dle.rae.es/"));
    }
}
