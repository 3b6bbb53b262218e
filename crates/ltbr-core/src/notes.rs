//! Notes store: ordered free-text notes with a selection cursor.
//!
//! Whether deletion asks for confirmation is a session concern; this store
//! only executes deletes.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    notes: Vec<String>,
    selected: usize,
}

impl Notes {
    pub fn from_notes(notes: Vec<String>) -> Self {
        Self { notes, selected: 0 }
    }

    /// Appends the trimmed text. Returns false when it trims to nothing.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.notes.push(trimmed.to_string());
        true
    }

    /// Removes the note at `index`; out-of-range indices are a no-op.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index >= self.notes.len() {
            return None;
        }
        let removed = self.notes.remove(index);
        self.selected = self.selected.min(self.notes.len().saturating_sub(1));
        Some(removed)
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.notes.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }
}
