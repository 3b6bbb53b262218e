//! Vocabulary tab: list of saved words with selection and deletion.

mod render;
mod update;

pub use render::render_vocabulary;
pub use update::{handle_key, scroll_selection};
