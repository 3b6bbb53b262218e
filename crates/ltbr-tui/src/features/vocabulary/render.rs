use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::TuiState;

pub fn render_vocabulary(state: &TuiState, frame: &mut Frame, area: Rect) {
    let vocabulary = &state.vocabulary;
    if vocabulary.is_empty() {
        let hint = Line::from(Span::styled(
            "No words yet. Press w on the Text tab to add one.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let lines: Vec<Line> = vocabulary
        .words()
        .iter()
        .enumerate()
        .skip(state.vocab_offset)
        .take(area.height as usize)
        .map(|(i, word)| {
            if i == vocabulary.selected() {
                Line::from(Span::styled(
                    format!("▶ {word}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {word}"))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
