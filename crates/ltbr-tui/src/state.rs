//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── document: Document        (corpus, store key, file name)
//! │   ├── cursor + viewport offsets
//! │   ├── vocabulary / notes        (mutable stores)
//! │   ├── stats                     (computed once at load)
//! │   ├── search                    (last executed search)
//! │   └── accounting                (reading time, words read)
//! └── overlay: Option<Overlay>      (modal dialogs)
//! ```
//!
//! Overlays live beside `TuiState` rather than inside it so that an overlay
//! handler can hold `&mut self` while reading `&TuiState`.

use std::cell::Cell;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use ltbr_core::Corpus;
use ltbr_core::clock::Clock;
use ltbr_core::config::Config;
use ltbr_core::notes::Notes;
use ltbr_core::progress::ProgressEntry;
use ltbr_core::reading::{ReadingAccounting, format_remaining};
use ltbr_core::search::SearchState;
use ltbr_core::stats::Statistics;
use ltbr_core::viewport::centered_offset;
use ltbr_core::vocabulary::Vocabulary;
use ratatui::layout::Rect;

use crate::overlays::Overlay;

/// How long a status message stays visible.
pub const STATUS_TTL_SECS: i64 = 4;

/// Content height assumed until the first frame reports the real size.
const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

// ============================================================================
// AppState (Combined State)
// ============================================================================

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(tui: TuiState) -> Self {
        Self { tui, overlay: None }
    }
}

// ============================================================================
// Tab
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Text,
    Vocabulary,
    Notes,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Text, Tab::Vocabulary, Tab::Notes, Tab::Statistics];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Text => "Text",
            Tab::Vocabulary => "Vocabulary",
            Tab::Notes => "Notes",
            Tab::Statistics => "Statistics",
        }
    }
}

// ============================================================================
// Document / StatusMessage
// ============================================================================

/// The loaded document and its identity in the progress store.
#[derive(Debug, Clone)]
pub struct Document {
    /// Progress store key (digest of the absolute path).
    pub key: String,
    /// Base file name, shown under the tab bar.
    pub file_name: String,
    pub corpus: Corpus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// TuiState
// ============================================================================

/// Reading session state (everything except the active overlay).
pub struct TuiState {
    /// Set once the session should end.
    pub should_quit: bool,
    pub document: Document,
    pub stats: Statistics,
    /// 0-based line under the cursor.
    pub current_line: usize,
    /// Word index within the current line.
    pub current_word: usize,
    /// First visible line of the text tab.
    pub text_offset: usize,
    pub vocabulary: Vocabulary,
    /// First visible entry of the vocabulary tab.
    pub vocab_offset: usize,
    pub notes: Notes,
    pub search: SearchState,
    pub accounting: ReadingAccounting,
    pub tab: Tab,
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    /// Transient feedback shown in the status bar.
    pub status: Option<StatusMessage>,
    /// Last word the reader marked with `w`.
    pub last_added_word: Option<String>,
    /// Last word copied with `c`.
    pub last_copied_word: Option<String>,
    /// Rows available to the tab content.
    pub viewport_height: usize,
    /// Tab bar hit areas (written during render, read for mouse clicks).
    pub tab_areas: Cell<[Rect; 4]>,
    /// Save failure from the final flush, reported once the terminal is back.
    pub exit_error: Option<String>,
}

impl TuiState {
    /// Builds the session for `document`, restoring `saved` progress.
    ///
    /// The saved line is only applied when it lies strictly inside the
    /// document (line 0 is the default anyway).
    pub fn new(
        document: Document,
        saved: Option<ProgressEntry>,
        config: Config,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let saved = saved.unwrap_or_default();
        let line_count = document.corpus.line_count();
        let current_line = if saved.line > 0 && saved.line < line_count {
            saved.line
        } else {
            0
        };

        let stats = Statistics::compute(&document.corpus, config.top_words);
        let accounting = ReadingAccounting::new(
            saved.reading_seconds,
            saved.read_words,
            clock.now(),
            config.idle_threshold_secs,
        );

        let mut state = Self {
            should_quit: false,
            document,
            stats,
            current_line,
            current_word: 0,
            text_offset: 0,
            vocabulary: Vocabulary::from_words(saved.vocabulary),
            vocab_offset: 0,
            notes: Notes::from_notes(saved.notes),
            search: SearchState::default(),
            accounting,
            tab: Tab::Text,
            config,
            clock,
            status: None,
            last_added_word: None,
            last_copied_word: None,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            tab_areas: Cell::new([Rect::default(); 4]),
            exit_error: None,
        };
        state.sync_viewports();
        state
    }

    pub fn corpus(&self) -> &Corpus {
        &self.document.corpus
    }

    pub fn last_line(&self) -> usize {
        self.corpus().line_count().saturating_sub(1)
    }

    /// Words of the line under the cursor.
    pub fn line_words(&self) -> Vec<&str> {
        self.corpus().words(self.current_line)
    }

    /// Raw (unsanitized) word under the cursor.
    pub fn current_word_text(&self) -> Option<&str> {
        self.line_words().get(self.current_word).copied()
    }

    /// Moves the cursor to `line` (clamped) and resets the word index.
    pub fn set_line(&mut self, line: usize) {
        self.current_line = line.min(self.last_line());
        self.current_word = 0;
    }

    /// Recenters the text and vocabulary viewports on their selections.
    pub fn sync_viewports(&mut self) {
        self.text_offset = centered_offset(
            self.current_line,
            self.corpus().line_count(),
            self.viewport_height,
        );
        self.vocab_offset = centered_offset(
            self.vocabulary.selected(),
            self.vocabulary.len(),
            self.viewport_height,
        );
    }

    pub fn wpm(&self) -> f64 {
        self.accounting.wpm(self.config.default_wpm)
    }

    /// Words between the cursor and the end, minus this session's reading.
    pub fn words_left(&self) -> i64 {
        let read = self.corpus().words_before(self.current_line) as i64
            + self.accounting.session_words_read as i64;
        self.corpus().total_words() as i64 - read
    }

    pub fn remaining_time(&self) -> String {
        format_remaining(self.words_left(), self.wpm())
    }

    /// Progress record with session counters folded into the totals.
    pub fn progress_entry(&self) -> ProgressEntry {
        ProgressEntry {
            file_name: self.document.file_name.clone(),
            line: self.current_line,
            notes: self.notes.notes().to_vec(),
            read_words: self.accounting.combined_words(),
            reading_seconds: self.accounting.combined_seconds(),
            vocabulary: self.vocabulary.words().to_vec(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.push_status(text.into(), false);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.push_status(text.into(), true);
    }

    fn push_status(&mut self, text: String, is_error: bool) {
        let expires_at = self.clock.now() + TimeDelta::seconds(STATUS_TTL_SECS);
        self.status = Some(StatusMessage {
            text,
            is_error,
            expires_at,
        });
    }

    /// Drops the status message once it has expired.
    pub fn expire_status(&mut self) {
        let now = self.clock.now();
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }

    /// Switches tabs. Entering Vocabulary or Notes resets its selection.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        match tab {
            Tab::Vocabulary => {
                self.vocabulary.select(0);
                self.sync_viewports();
            }
            Tab::Notes => self.notes.select(0),
            Tab::Text | Tab::Statistics => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use ltbr_core::Corpus;
    use ltbr_core::clock::{Clock, ManualClock};
    use ltbr_core::config::Config;
    use ltbr_core::progress::ProgressEntry;

    use super::{Document, TuiState};

    pub fn document(lines: &[&str]) -> Document {
        Document {
            key: "test-key".to_string(),
            file_name: "book.txt".to_string(),
            corpus: Corpus::from_lines(lines.iter().copied()),
        }
    }

    pub fn tui_with(
        lines: &[&str],
        saved: Option<ProgressEntry>,
        config: Config,
    ) -> (TuiState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let shared: Arc<dyn Clock> = Arc::<ManualClock>::clone(&clock);
        let state = TuiState::new(document(lines), saved, config, shared);
        (state, clock)
    }

    pub fn tui(lines: &[&str]) -> (TuiState, Arc<ManualClock>) {
        tui_with(lines, None, Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{tui, tui_with};
    use super::*;

    #[test]
    fn test_restores_saved_line_inside_document() {
        let saved = ProgressEntry {
            line: 2,
            vocabulary: vec!["hola".into()],
            notes: vec!["nota".into()],
            ..ProgressEntry::default()
        };
        let (state, _) = tui_with(&["a", "b", "c", "d"], Some(saved), Config::default());
        assert_eq!(state.current_line, 2);
        assert_eq!(state.vocabulary.words(), &["hola"]);
        assert_eq!(state.notes.notes(), &["nota"]);
    }

    #[test]
    fn test_ignores_saved_line_out_of_range() {
        let saved = ProgressEntry {
            line: 4,
            ..ProgressEntry::default()
        };
        let (state, _) = tui_with(&["a", "b", "c", "d"], Some(saved), Config::default());
        assert_eq!(state.current_line, 0);
    }

    #[test]
    fn test_words_left_and_remaining_time() {
        let (mut state, _) = tui(&["one two three", "four five", "six"]);
        assert_eq!(state.words_left(), 6);
        state.set_line(2);
        assert_eq!(state.words_left(), 1);
        assert_eq!(state.remaining_time(), "0m");
    }

    #[test]
    fn test_progress_entry_folds_session_counters() {
        let saved = ProgressEntry {
            read_words: 100,
            reading_seconds: 30.0,
            ..ProgressEntry::default()
        };
        let (mut state, _) = tui_with(&["a b", "c"], Some(saved), Config::default());
        state.accounting.session_words_read = 2;
        state.accounting.session_reading_seconds = 5.0;

        let entry = state.progress_entry();
        assert_eq!(entry.read_words, 102);
        assert!((entry.reading_seconds - 35.0).abs() < f64::EPSILON);
        assert_eq!(entry.file_name, "book.txt");
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let (mut state, clock) = tui(&["a"]);
        state.set_status("Saved");
        clock.advance_secs(STATUS_TTL_SECS - 1);
        state.expire_status();
        assert!(state.status.is_some());
        clock.advance_secs(1);
        state.expire_status();
        assert!(state.status.is_none());
    }

    #[test]
    fn test_switch_tab_resets_selection() {
        let (mut state, _) = tui(&["a"]);
        state.vocabulary = Vocabulary::from_words(vec!["x".into(), "y".into()]);
        state.vocabulary.select(1);
        state.switch_tab(Tab::Vocabulary);
        assert_eq!(state.vocabulary.selected(), 0);
        assert_eq!(state.tab, Tab::Vocabulary);
    }
}
