//! Statistics engine: aggregate metrics derived from a corpus.
//!
//! Computed once at load in a single O(total words) pass; never incremental.

use std::collections::HashMap;

use crate::corpus::{Corpus, sanitize_word};

/// Default number of ranked words shown on the statistics tab.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Function words excluded from the frequency ranking (English and Spanish).
const STOPWORDS: &[&str] = &[
    // English
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "my", "no",
    "not", "now", "of", "on", "one", "only", "or", "our", "out", "she", "so", "some", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "to", "up", "us",
    "was", "we", "were", "what", "when", "which", "who", "will", "with", "would", "you", "your",
    // Spanish
    "al", "algo", "como", "con", "cuando", "de", "del", "desde", "donde", "el", "ella", "ellos",
    "en", "entre", "era", "es", "esa", "ese", "eso", "esta", "este", "esto", "fue", "ha", "hay",
    "la", "las", "le", "les", "lo", "los", "mas", "más", "mi", "muy", "ni", "nos", "o",
    "para", "pero", "por", "porque", "que", "qué", "se", "ser", "si", "sí", "sin", "sobre", "su",
    "sus", "también", "te", "tu", "un", "una", "uno", "unos", "ya", "yo",
];

/// Returns true if `word` (already lowercased and sanitized) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// A ranked word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Aggregate corpus metrics shown on the statistics tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_lines: usize,
    pub total_words: usize,
    /// First longest line by character count.
    pub longest_line: String,
    pub longest_line_len: usize,
    /// First longest sanitized word by character count.
    pub longest_word: String,
    pub top_words: Vec<WordCount>,
}

impl Statistics {
    pub fn compute(corpus: &Corpus, top_n: usize) -> Self {
        // The placeholder line of an empty document is not counted
        let total_lines = if corpus.is_empty() {
            0
        } else {
            corpus.line_count()
        };
        let mut stats = Statistics {
            total_lines,
            total_words: corpus.total_words(),
            ..Default::default()
        };

        let mut longest_word_len = 0;
        for line in corpus.lines() {
            let line_len = line.chars().count();
            if line_len > stats.longest_line_len {
                stats.longest_line_len = line_len;
                stats.longest_line.clone_from(line);
            }

            for word in line.split_whitespace() {
                let sanitized = sanitize_word(word);
                let len = sanitized.chars().count();
                if len > longest_word_len {
                    longest_word_len = len;
                    stats.longest_word = sanitized;
                }
            }
        }

        stats.top_words = top_frequent_words(corpus.lines(), top_n);
        stats
    }
}

/// Ranks sanitized, lowercased words by frequency, excluding stopwords.
///
/// Ties are broken by ascending lexical order. At most `n` entries.
pub fn top_frequent_words(lines: &[String], n: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for line in lines {
        for word in line.split_whitespace() {
            let sanitized = sanitize_word(&word.to_lowercase());
            if sanitized.is_empty() || is_stopword(&sanitized) {
                continue;
            }
            *counts.entry(sanitized).or_default() += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(n);
    ranked
}
