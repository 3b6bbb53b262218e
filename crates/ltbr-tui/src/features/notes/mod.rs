//! Notes tab: free-text notes with selection and (optionally confirmed)
//! deletion.

mod render;
mod update;

pub use render::render_notes;
pub use update::handle_key;
