//! Goto-line prompt overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::OverlayUpdate;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GotoLineState {
    /// Digits typed so far (1-based line number).
    pub input: String,
}

impl GotoLineState {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_goto_line_overlay(frame, self, area);
    }

    /// Digits accumulate; Enter jumps when the number names an existing
    /// line and closes either way. Anything else is ignored.
    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Enter => {
                let line_count = tui.corpus().line_count();
                match self.input.parse::<usize>() {
                    Ok(n) if (1..=line_count).contains(&n) => {
                        OverlayUpdate::close().with_mutations(vec![StateMutation::GotoLine(n - 1)])
                    }
                    _ => OverlayUpdate::close(),
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if c.is_ascii_digit() && !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_goto_line_overlay(frame: &mut Frame, state: &GotoLineState, area: Rect) {
    use super::render_utils::{
        InputHint, InputLine, OverlayConfig, render_input_line, render_overlay,
    };

    let hints = [InputHint::new("Enter", "go"), InputHint::new("Esc", "cancel")];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Go to line",
            border_color: Color::Blue,
            width: 34,
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
            placeholder: None,
            prompt: "Line: ",
            color: Color::Blue,
        },
    );
}
