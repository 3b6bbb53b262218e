//! Case-insensitive circular line search.

/// Finds every line containing `term`, ignoring case.
///
/// The scan covers `[start, len)` then wraps over `[0, start)`, so each
/// matching line appears exactly once, ordered from the cursor onward.
pub fn circular_search(lines: &[String], start: usize, term: &str) -> Vec<usize> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    let start = start.min(lines.len());
    (start..lines.len())
        .chain(0..start)
        .filter(|&i| lines[i].to_lowercase().contains(&term))
        .collect()
}

/// Results of the last executed search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Lowercased search term.
    pub term: String,
    pub results: Vec<usize>,
    /// Index into `results`; `None` when there are no results.
    pub current: Option<usize>,
}

impl SearchState {
    pub fn run(lines: &[String], start: usize, term: &str) -> Self {
        let results = circular_search(lines, start, term);
        let current = (!results.is_empty()).then_some(0);
        Self {
            term: term.to_lowercase(),
            results,
            current,
        }
    }

    /// Line of the active result.
    pub fn current_line(&self) -> Option<usize> {
        self.current.and_then(|i| self.results.get(i).copied())
    }

    /// Advances to the next result, wrapping at the end.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.results.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |i| (i + 1) % len));
        self.current_line()
    }

    /// Retreats to the previous result, wrapping at the start.
    pub fn prev(&mut self) -> Option<usize> {
        let len = self.results.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |i| (i + len - 1) % len));
        self.current_line()
    }

    pub fn is_active(&self) -> bool {
        !self.results.is_empty()
    }
}
