//! Key binding reference.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;

/// Key bindings grouped by section, as shown in the overlay.
pub const KEY_BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("1-4", "switch tab"),
            ("s", "save progress"),
            ("q / Ctrl+C", "save and quit"),
            ("Ctrl+N", "new note"),
            ("o", "look up current word"),
            ("n / N", "next / previous search result"),
            ("?", "toggle help"),
        ],
    ),
    (
        "Text",
        &[
            ("j k / ↓ ↑", "next / previous line"),
            ("← →", "previous / next word"),
            ("0 / $", "first / last word"),
            ("PgUp PgDn", "page up / down"),
            ("Home End", "first / last line"),
            ("w", "add word to vocabulary"),
            ("c", "copy word"),
            ("/", "search"),
            ("g", "go to line"),
        ],
    ),
    (
        "Vocabulary / Notes",
        &[("j k / ↓ ↑", "select"), ("d", "delete selected")],
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpState;

impl HelpState {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_help(frame, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let key_style = Style::default().fg(Color::Yellow);
    let mut lines = Vec::new();
    for (i, (section, bindings)) in KEY_BINDINGS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), key_style),
                Span::raw(*action),
            ]));
        }
    }

    let hints = [InputHint::new("Esc", "close")];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Help",
            border_color: Color::Cyan,
            width: 50,
            height: lines.len() as u16 + 3,
            hints: &hints,
        },
    );
    frame.render_widget(Paragraph::new(lines), layout.body);
}
