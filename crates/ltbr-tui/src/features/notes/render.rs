use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::TuiState;

/// Draws the notes, one block per note with its lines indented under a
/// marker. The view scrolls so the selected note's first line stays visible.
pub fn render_notes(state: &TuiState, frame: &mut Frame, area: Rect) {
    let notes = &state.notes;
    if notes.is_empty() {
        let hint = Line::from(Span::styled(
            "No notes yet. Press Ctrl+N to write one.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_row = 0;
    for (i, note) in notes.notes().iter().enumerate() {
        let selected = i == notes.selected();
        if selected {
            selected_row = lines.len();
        }
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        for (j, text) in note.lines().enumerate() {
            let marker = match (j, selected) {
                (0, true) => "▶ ",
                (0, false) => "• ",
                _ => "  ",
            };
            lines.push(Line::from(Span::styled(format!("{marker}{text}"), style)));
        }
        lines.push(Line::default());
    }

    let height = area.height as usize;
    let scroll = selected_row.saturating_sub(height.saturating_sub(1));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
