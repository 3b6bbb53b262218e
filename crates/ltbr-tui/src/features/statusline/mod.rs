//! Status bar: position, search summary, tab context, remaining time and the
//! transient status message.

mod render;

pub use render::{render_status_line, status_segments};
