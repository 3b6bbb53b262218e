//! Text corpus: the immutable, parsed document.
//!
//! Lines are split once at load time. Words are whitespace-delimited tokens;
//! a prefix sum of per-line word counts answers "words before line N" in O(1).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Immutable document model for a reading session.
#[derive(Debug, Clone)]
pub struct Corpus {
    lines: Vec<String>,
    /// `cumulative_words[i]` = total words in lines `[0, i)`.
    cumulative_words: Vec<usize>,
    /// The source had no lines; `lines` holds only the placeholder.
    empty: bool,
}

impl Corpus {
    /// Builds a corpus from raw lines.
    ///
    /// An empty input is stored as a single empty line so that
    /// `0 <= current_line < line_count()` is always satisfiable.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let empty = lines.is_empty();
        if empty {
            lines.push(String::new());
        }

        let mut cumulative_words = Vec::with_capacity(lines.len() + 1);
        cumulative_words.push(0);
        let mut running = 0;
        for line in &lines {
            running += line.split_whitespace().count();
            cumulative_words.push(running);
        }

        Self {
            lines,
            cumulative_words,
            empty,
        }
    }

    /// Parses document text into lines (`\n` and `\r\n` terminators).
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Reads a document from disk.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the document had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Whitespace-delimited words of a line (empty for out-of-range lines).
    pub fn words(&self, index: usize) -> Vec<&str> {
        self.line(index)
            .map(|line| line.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn word_count(&self, index: usize) -> usize {
        self.cumulative_words
            .get(index + 1)
            .zip(self.cumulative_words.get(index))
            .map_or(0, |(end, start)| end - start)
    }

    /// Words in lines `[0, line)`. Saturates at the document end.
    pub fn words_before(&self, line: usize) -> usize {
        let idx = line.min(self.lines.len());
        self.cumulative_words[idx]
    }

    pub fn total_words(&self) -> usize {
        self.cumulative_words[self.lines.len()]
    }

    pub fn cumulative_words(&self) -> &[usize] {
        &self.cumulative_words
    }

    /// Percentage of the document passed when the cursor sits on `line`.
    pub fn percent_at(&self, line: usize) -> f64 {
        let last = self.lines.len().saturating_sub(1);
        if last == 0 {
            return 100.0;
        }
        line.min(last) as f64 / last as f64 * 100.0
    }
}

/// Strips every character that is not a letter or a digit.
///
/// Used before vocabulary storage, frequency counting and link building.
pub fn sanitize_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}
