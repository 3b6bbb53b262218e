//! State mutations requested by overlays.
//!
//! Overlays only see `&TuiState`; the reducer applies what they ask for
//! after the key is handled.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Jump to a 0-based line (already validated).
    GotoLine(usize),
    /// Run a search from the cursor.
    Search(String),
    AddNote(String),
    DeleteNote(usize),
}
