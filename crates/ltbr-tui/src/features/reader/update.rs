//! Text tab reducer.
//!
//! Only single-line forward moves (`j`/Down) feed the reading-time
//! accounting. Every other line jump just refreshes the last action time.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::features::KeyOutcome;
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => line_down(tui),
        KeyCode::Char('k') | KeyCode::Up => line_up(tui),
        KeyCode::Left => word_step(tui, false),
        KeyCode::Right => word_step(tui, true),
        KeyCode::Char('0') => {
            if !tui.line_words().is_empty() {
                tui.current_word = 0;
            }
        }
        KeyCode::Char('$') => {
            let count = tui.line_words().len();
            if count > 0 {
                tui.current_word = count - 1;
            }
        }
        KeyCode::PageDown => {
            let page = tui.viewport_height.max(1) as isize;
            scroll_lines(tui, page);
        }
        KeyCode::PageUp => {
            let page = tui.viewport_height.max(1) as isize;
            scroll_lines(tui, -page);
        }
        KeyCode::Home => jump_to(tui, 0),
        KeyCode::End => jump_to(tui, tui.last_line()),
        KeyCode::Char('w') => add_current_word(tui),
        KeyCode::Char('c') => {
            if let Some(word) = tui.current_word_text() {
                return KeyOutcome::effect(UiEffect::CopyToClipboard {
                    text: word.to_string(),
                });
            }
        }
        KeyCode::Char('/') => return KeyOutcome::overlay(OverlayRequest::Search),
        KeyCode::Char('g') => return KeyOutcome::overlay(OverlayRequest::GotoLine),
        _ => {}
    }
    KeyOutcome::none()
}

/// Moves forward one line, crediting the time spent and the words of the
/// line being left.
fn line_down(tui: &mut TuiState) {
    if tui.current_line >= tui.last_line() {
        return;
    }
    let now = tui.clock.now();
    let words = tui.corpus().word_count(tui.current_line);
    tui.accounting.record_forward(now, words);
    tui.set_line(tui.current_line + 1);
}

fn line_up(tui: &mut TuiState) {
    if tui.current_line == 0 {
        return;
    }
    tui.accounting.touch(tui.clock.now());
    tui.set_line(tui.current_line - 1);
}

/// Circular word navigation within the current line.
fn word_step(tui: &mut TuiState, forward: bool) {
    let count = tui.line_words().len();
    if count == 0 {
        return;
    }
    tui.current_word = if forward {
        (tui.current_word + 1) % count
    } else {
        (tui.current_word + count - 1) % count
    };
}

fn jump_to(tui: &mut TuiState, line: usize) {
    tui.accounting.touch(tui.clock.now());
    tui.set_line(line);
}

/// Moves the cursor by `delta` lines (clamped) without accounting.
pub fn scroll_lines(tui: &mut TuiState, delta: isize) {
    let target = tui.current_line.saturating_add_signed(delta);
    if target.min(tui.last_line()) != tui.current_line {
        jump_to(tui, target);
    }
}

fn add_current_word(tui: &mut TuiState) {
    let Some(word) = tui.current_word_text().map(str::to_string) else {
        return;
    };
    if tui.vocabulary.add(&word).is_none() {
        tracing::debug!(word, "word already in vocabulary or empty after sanitizing");
    }
    tui.last_added_word = Some(word);
}
