//! Statistics tab.

mod render;

pub use render::{render_stats, stats_lines};
