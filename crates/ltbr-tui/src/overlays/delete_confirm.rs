//! Yes/No confirmation shown before a note is deleted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::mutations::StateMutation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmState {
    /// Note to delete on confirmation.
    pub index: usize,
    /// Current choice; starts on "No".
    pub yes: bool,
}

impl DeleteConfirmState {
    pub fn new(index: usize) -> Self {
        Self { index, yes: false }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_delete_confirm(frame, self, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.yes = false;
                OverlayUpdate::stay()
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.yes = true;
                OverlayUpdate::stay()
            }
            KeyCode::Enter if self.yes => {
                OverlayUpdate::close().with_mutations(vec![StateMutation::DeleteNote(self.index)])
            }
            KeyCode::Enter => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_delete_confirm(frame: &mut Frame, state: &DeleteConfirmState, area: Rect) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let hints = [
        InputHint::new("←→", "choose"),
        InputHint::new("Enter", "confirm"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Delete note?",
            border_color: Color::Red,
            width: 44,
            height: 6,
            hints: &hints,
        },
    );

    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::Gray);
    let (no_style, yes_style) = if state.yes {
        (idle, selected)
    } else {
        (selected, idle)
    };

    let prompt = Paragraph::new(Line::from(format!("Delete note {}?", state.index + 1)))
        .alignment(Alignment::Center);
    frame.render_widget(
        prompt,
        Rect::new(layout.body.x, layout.body.y, layout.body.width, 1),
    );

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("  No  ", no_style),
        Span::raw("   "),
        Span::styled("  Yes  ", yes_style),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(
        buttons,
        Rect::new(
            layout.body.x,
            layout.body.y + 2u16.min(layout.body.height.saturating_sub(1)),
            layout.body.width,
            1,
        ),
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

    #[test]
    fn test_defaults_to_no() {
        let mut state = DeleteConfirmState::new(1);
        let update = state.handle_key(make_key_event(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_right_then_enter_deletes() {
        let mut state = DeleteConfirmState::new(1);
        state.handle_key(make_key_event(KeyCode::Char('l')));
        let update = state.handle_key(make_key_event(KeyCode::Enter));
        assert_eq!(update.mutations, vec![StateMutation::DeleteNote(1)]);
    }

    #[test]
    fn test_left_returns_to_no() {
        let mut state = DeleteConfirmState::new(0);
        state.handle_key(make_key_event(KeyCode::Right));
        state.handle_key(make_key_event(KeyCode::Left));
        assert!(!state.yes);
    }

    #[test]
    fn test_escape_cancels_even_on_yes() {
        let mut state = DeleteConfirmState::new(0);
        state.handle_key(make_key_event(KeyCode::Right));
        let update = state.handle_key(make_key_event(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }
}
