use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;
use crate::state::{Tab, TuiState};

const SEPARATOR: &str = " | ";

/// Informational segments of the status bar, left to right.
pub fn status_segments(state: &TuiState) -> Vec<String> {
    let corpus = state.corpus();
    let mut segments = vec![format!(
        "Line: {}/{} ({:.0}%)",
        state.current_line + 1,
        corpus.line_count(),
        corpus.percent_at(state.current_line)
    )];

    let search = &state.search;
    if let Some(current) = search.current {
        segments.push(format!(
            "Search: {}/{} for '{}'",
            current + 1,
            search.results.len(),
            search.term
        ));
    }

    match state.tab {
        Tab::Text => {
            if let Some(word) = &state.last_added_word {
                segments.push(format!("Selected: {word}"));
            }
            if let Some(word) = &state.last_copied_word {
                segments.push(format!("Copied: {word}"));
            }
        }
        Tab::Vocabulary => {
            if let Some(word) = state.vocabulary.selected_word() {
                segments.push(format!("Word: {word}"));
            }
        }
        Tab::Notes => {
            if !state.notes.is_empty() {
                segments.push(format!(
                    "Note: {}/{}",
                    state.notes.selected() + 1,
                    state.notes.len()
                ));
            }
        }
        Tab::Statistics => {}
    }

    segments.push(format!("Remaining: {}", state.remaining_time()));
    segments
}

pub fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let info = status_segments(state).join(SEPARATOR);
    let mut spans = vec![Span::styled(
        info.clone(),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(status) = &state.status {
        let used = info.width() + SEPARATOR.len();
        let room = (area.width as usize).saturating_sub(used);
        let color = if status.is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            truncate_with_ellipsis(&status.text, room),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ltbr_core::search::SearchState;

    use super::*;
    use crate::state::test_support::tui;

    #[test]
    fn test_segments_on_text_tab() {
        let (mut state, _) = tui(&["foo bar", "baz", "foo qux"]);
        state.set_line(1);
        state.search = SearchState::run(state.corpus().lines(), 1, "FOO");
        state.last_added_word = Some("bar".to_string());

        assert_eq!(
            status_segments(&state),
            vec![
                "Line: 2/3 (50%)".to_string(),
                "Search: 1/2 for 'foo'".to_string(),
                "Selected: bar".to_string(),
                "Remaining: 0m".to_string(),
            ]
        );
    }

    #[test]
    fn test_segments_on_notes_tab() {
        let (mut state, _) = tui(&["a"]);
        state.notes.add("first");
        state.notes.add("second");
        state.switch_tab(Tab::Notes);
        state.notes.select_next();

        let segments = status_segments(&state);
        assert_eq!(segments[0], "Line: 1/1 (100%)");
        assert!(segments.contains(&"Note: 2/2".to_string()));
    }
}
