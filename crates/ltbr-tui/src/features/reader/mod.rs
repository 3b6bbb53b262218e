//! Text tab: line/word cursor, reading-time accounting, vocabulary capture.

mod render;
mod update;

pub use render::render_text;
pub use update::{handle_key, scroll_lines};
