//! Reading-time accounting, WPM and remaining-time projection.
//!
//! Only forward line moves accumulate time and words. Pauses at or above the
//! idle threshold are dropped so that leaving the reader open does not skew
//! the speed estimate.

use chrono::{DateTime, TimeDelta, Utc};

/// Reading speed used before any time or words have been recorded.
pub const DEFAULT_WPM: f64 = 250.0;

/// Session counters captured when a save is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountingSnapshot {
    pub reading_seconds: f64,
    pub words_read: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingAccounting {
    /// Persisted totals from earlier sessions.
    pub total_reading_seconds: f64,
    pub total_read_words: u64,
    /// Unsaved counters for this session.
    pub session_reading_seconds: f64,
    pub session_words_read: u64,
    pub last_action: DateTime<Utc>,
    idle_threshold: TimeDelta,
}

impl ReadingAccounting {
    pub fn new(
        total_reading_seconds: f64,
        total_read_words: u64,
        now: DateTime<Utc>,
        idle_threshold_secs: u64,
    ) -> Self {
        let idle_threshold = i64::try_from(idle_threshold_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            total_reading_seconds,
            total_read_words,
            session_reading_seconds: 0.0,
            session_words_read: 0,
            last_action: now,
            idle_threshold,
        }
    }

    /// Records a forward step off a line holding `words` words.
    pub fn record_forward(&mut self, now: DateTime<Utc>, words: usize) {
        let delta = now - self.last_action;
        if delta >= TimeDelta::zero() && delta < self.idle_threshold {
            self.session_reading_seconds += delta.num_milliseconds() as f64 / 1000.0;
            self.session_words_read += words as u64;
        }
        self.last_action = now;
    }

    /// Refreshes the last action time without accumulating anything.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_action = now;
    }

    pub fn combined_seconds(&self) -> f64 {
        self.total_reading_seconds + self.session_reading_seconds
    }

    pub fn combined_words(&self) -> u64 {
        self.total_read_words + self.session_words_read
    }

    /// Words per minute over all recorded reading, or `default_wpm` when
    /// there is nothing to divide yet.
    pub fn wpm(&self, default_wpm: f64) -> f64 {
        let seconds = self.combined_seconds();
        let words = self.combined_words();
        if seconds <= 0.0 || words == 0 {
            return default_wpm;
        }
        words as f64 / (seconds / 60.0)
    }

    pub fn snapshot(&self) -> AccountingSnapshot {
        AccountingSnapshot {
            reading_seconds: self.session_reading_seconds,
            words_read: self.session_words_read,
        }
    }

    /// Moves a successfully saved snapshot from the session counters into
    /// the totals. Anything recorded after the snapshot stays in the session.
    pub fn commit_saved(&mut self, saved: AccountingSnapshot) {
        self.total_reading_seconds += saved.reading_seconds;
        self.total_read_words += saved.words_read;
        self.session_reading_seconds =
            (self.session_reading_seconds - saved.reading_seconds).max(0.0);
        self.session_words_read = self.session_words_read.saturating_sub(saved.words_read);
    }
}

/// Formats the time needed to read `words_left` words at `wpm`.
pub fn format_remaining(words_left: i64, wpm: f64) -> String {
    if words_left <= 0 || wpm <= 0.0 {
        return "0m".to_string();
    }
    let minutes = (words_left as f64 / wpm) as i64;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
