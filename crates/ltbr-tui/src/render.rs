//! Pure view/render functions for the reader.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! return effects. The one exception to "never mutate" is the tab bar hit
//! areas, recorded through a `Cell` so mouse clicks can be resolved later.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;
use crate::features::{notes, reader, stats, statusline, vocabulary};
use crate::overlays::OverlayExt;
use crate::state::{AppState, Tab, TuiState};

/// Height of the bordered tab bar.
const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the file name label under the tab bar.
const FILE_LABEL_HEIGHT: u16 = 1;

/// Height of the status bar.
const STATUS_HEIGHT: u16 = 1;

/// Rows left for tab content on a terminal `height` rows tall (at least 1).
pub fn content_height(height: u16) -> usize {
    height.saturating_sub(TAB_BAR_HEIGHT + FILE_LABEL_HEIGHT + STATUS_HEIGHT).max(1) as usize
}

/// Renders the entire reader to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(FILE_LABEL_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_tab_bar(state, frame, chunks[0]);
    render_file_label(state, frame, chunks[1]);

    match state.tab {
        Tab::Text => reader::render_text(state, frame, chunks[2]),
        Tab::Vocabulary => vocabulary::render_vocabulary(state, frame, chunks[2]),
        Tab::Notes => notes::render_notes(state, frame, chunks[2]),
        Tab::Statistics => stats::render_stats(state, frame, chunks[2]),
    }

    statusline::render_status_line(state, frame, chunks[3]);

    // Overlays draw last, above everything else
    app.overlay.render(frame, area);
}

fn render_tab_bar(state: &TuiState, frame: &mut Frame, area: Rect) {
    let mut areas = [Rect::default(); 4];
    let mut x = area.x;
    let right = area.x + area.width;

    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let label = format!("{} {}", i + 1, tab.title());
        let width = (label.width() as u16 + 4).min(right.saturating_sub(x));
        if width == 0 {
            break;
        }
        let tab_area = Rect::new(x, area.y, width, area.height);
        areas[i] = tab_area;
        x += width;

        let active = tab == state.tab;
        let (border, text) = if active {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {label} "), text)))
            .block(block);
        frame.render_widget(paragraph, tab_area);
    }

    state.tab_areas.set(areas);
}

fn render_file_label(state: &TuiState, frame: &mut Frame, area: Rect) {
    let label = truncate_with_ellipsis(
        &format!("📄 {}", state.document.file_name),
        area.width as usize,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::overlays::{Overlay, OverlayRequest};
    use crate::state::test_support::tui;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_content_height() {
        assert_eq!(content_height(24), 19);
        assert_eq!(content_height(5), 1);
        assert_eq!(content_height(0), 1);
    }

    #[test]
    fn test_render_shows_tabs_label_text_and_status() {
        let (state, _) = tui(&["En un lugar de la Mancha", "de cuyo nombre"]);
        let app = AppState::new(state);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("1 Text"));
        assert!(text.contains("4 Statistics"));
        assert!(text.contains("book.txt"));
        assert!(text.contains("Mancha"));
        assert!(text.contains("Line: 1/2 (0%)"));

        let areas = app.tui.tab_areas.get();
        assert_eq!(areas[0], Rect::new(0, 0, 10, 3));
        assert_eq!(areas[1].x, 10);
    }

    #[test]
    fn test_render_statistics_tab_and_overlay() {
        let (mut state, _) = tui(&["gato gato perro"]);
        state.switch_tab(Tab::Statistics);
        let mut app = AppState::new(state);
        app.overlay = Some(Overlay::open(OverlayRequest::Help));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("Help"));
        assert!(text.contains("Total words: 3"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let (state, _) = tui(&["a"]);
        let app = AppState::new(state);
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
    }
}
