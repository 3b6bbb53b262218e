use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::state::TuiState;

/// Statistics report, one entry per displayed row.
pub fn stats_lines(state: &TuiState) -> Vec<String> {
    let stats = &state.stats;
    let mut lines = vec![
        format!("Total lines: {}", stats.total_lines),
        format!("Total words: {}", stats.total_words),
        format!(
            "Longest line ({} chars): {}",
            stats.longest_line_len, stats.longest_line
        ),
        format!("Longest word: {}", stats.longest_word),
        format!(
            "Reading speed: {:.0} wpm (remaining {})",
            state.wpm(),
            state.remaining_time()
        ),
        format!(
            "Reading time: {}",
            format_duration(state.accounting.combined_seconds())
        ),
        String::new(),
        "Most frequent words:".to_string(),
    ];
    lines.extend(
        stats
            .top_words
            .iter()
            .enumerate()
            .map(|(i, wc)| format!("{}. {}: {}", i + 1, wc.word, wc.count)),
    );
    lines
}

fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0) as u64;
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

pub fn render_stats(state: &TuiState, frame: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = stats_lines(state)
        .into_iter()
        .map(|text| {
            if text.ends_with(':') {
                Line::from(Span::styled(text, heading))
            } else {
                Line::from(text)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::tui;

    #[test]
    fn test_stats_lines_list_ranked_words() {
        let (state, _) = tui(&["gato perro gato", "el gato"]);
        let lines = stats_lines(&state);
        assert_eq!(lines[0], "Total lines: 2");
        assert_eq!(lines[1], "Total words: 5");
        assert!(lines.contains(&"1. gato: 3".to_string()));
        assert!(lines.contains(&"2. perro: 1".to_string()));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0m");
        assert_eq!(format_duration(59.9), "0m");
        assert_eq!(format_duration(3_900.0), "1h 5m");
    }
}
