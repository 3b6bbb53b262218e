use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::TuiState;

/// Draws the visible slice of the document.
///
/// The cursor line is bold with the selected word on a cyan background; lines
/// matched by the last search are tinted.
pub fn render_text(state: &TuiState, frame: &mut Frame, area: Rect) {
    let height = area.height as usize;
    let lines: Vec<Line> = state
        .corpus()
        .lines()
        .iter()
        .enumerate()
        .skip(state.text_offset)
        .take(height)
        .map(|(index, text)| {
            if index == state.current_line {
                cursor_line(state)
            } else if state.search.results.contains(&index) {
                Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Yellow)))
            } else {
                Line::from(text.as_str())
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn cursor_line(state: &TuiState) -> Line<'_> {
    let words = state.line_words();
    let base = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(words.len() * 2);
    spans.push(Span::styled("▶ ", Style::default().fg(Color::Cyan)));
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", base));
        }
        let style = if i == state.current_word {
            base.fg(Color::Black).bg(Color::Cyan)
        } else {
            base
        };
        spans.push(Span::styled(word, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::state::test_support::tui;

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_renders_window_around_cursor() {
        let lines: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (mut state, _) = tui(&refs);
        state.viewport_height = 3;
        state.set_line(5);
        state.sync_viewports();

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| render_text(&state, f, f.area()))
            .unwrap();

        assert_eq!(row(&terminal, 0), "line 4");
        assert_eq!(row(&terminal, 1), "▶ line 5");
        assert_eq!(row(&terminal, 2), "line 6");
    }

    #[test]
    fn test_selected_word_is_highlighted() {
        let (mut state, _) = tui(&["uno dos"]);
        state.current_word = 1;

        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|f| render_text(&state, f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // "▶ uno dos": the selected word starts at column 6.
        assert_eq!(buffer[(6, 0)].bg, Color::Cyan);
        assert_ne!(buffer[(2, 0)].bg, Color::Cyan);
    }
}
