//! Multi-line note editor overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use crate::mutations::StateMutation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditorState {
    /// Never empty; the last entry is the line being typed.
    pub lines: Vec<String>,
}

impl NoteEditorState {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_note_editor(frame, self, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Char('s') if ctrl => {
                let text = self.text();
                let note = text.trim();
                if note.is_empty() {
                    return OverlayUpdate::close();
                }
                OverlayUpdate::close().with_mutations(vec![StateMutation::AddNote(note.to_string())])
            }
            KeyCode::Enter => {
                self.lines.push(String::new());
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                self.backspace();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.current_line_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Deletes the last character, or collapses an empty line into the
    /// previous one.
    fn backspace(&mut self) {
        if self.lines.len() > 1 && self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        } else {
            self.current_line_mut().pop();
        }
    }

    fn current_line_mut(&mut self) -> &mut String {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

impl Default for NoteEditorState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_note_editor(frame: &mut Frame, state: &NoteEditorState, area: Rect) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let width = (area.width / 4 * 3).clamp(30, 80);
    let height = (state.lines.len() as u16 + 4).clamp(8, 16);

    let hints = [
        InputHint::new("Ctrl+S", "save"),
        InputHint::new("Enter", "new line"),
        InputHint::new("Esc", "discard"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "New Note",
            border_color: Color::Green,
            width,
            height,
            hints: &hints,
        },
    );

    let visible = layout.body.height as usize;
    let skip = state.lines.len().saturating_sub(visible);
    let last = state.lines.len().saturating_sub(1);
    let lines: Vec<Line> = state
        .lines
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, text)| {
            let mut spans = vec![Span::raw(text.clone())];
            if i == last {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            }
            Line::from(spans)
        })
        .collect();

    if state.text().is_empty() {
        let placeholder = Line::from(vec![
            Span::styled("█", Style::default().fg(Color::Green)),
            Span::styled("Write your note here...", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(placeholder), layout.body);
    } else {
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            layout.body,
        );
    }
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

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..make_key_event(KeyCode::Char(c))
        }
    }

    fn type_text(editor: &mut NoteEditorState, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            editor.handle_key(make_key_event(code));
        }
    }

    #[test]
    fn test_save_commits_trimmed_multiline_text() {
        let mut editor = NoteEditorState::new();
        type_text(&mut editor, "  first\nsecond\n\n");
        let update = editor.handle_key(ctrl('s'));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(
            update.mutations,
            vec![StateMutation::AddNote("first\nsecond".into())]
        );
    }

    #[test]
    fn test_save_blank_note_commits_nothing() {
        let mut editor = NoteEditorState::new();
        type_text(&mut editor, " \n ");
        let update = editor.handle_key(ctrl('s'));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_backspace_collapses_empty_line() {
        let mut editor = NoteEditorState::new();
        type_text(&mut editor, "ab\n");
        assert_eq!(editor.lines, vec!["ab", ""]);

        editor.handle_key(make_key_event(KeyCode::Backspace));
        assert_eq!(editor.lines, vec!["ab"]);

        editor.handle_key(make_key_event(KeyCode::Backspace));
        assert_eq!(editor.lines, vec!["a"]);

        editor.handle_key(make_key_event(KeyCode::Backspace));
        editor.handle_key(make_key_event(KeyCode::Backspace));
        assert_eq!(editor.lines, vec![""]);
    }

    #[test]
    fn test_escape_discards() {
        let mut editor = NoteEditorState::new();
        type_text(&mut editor, "draft");
        let update = editor.handle_key(make_key_event(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }
}
