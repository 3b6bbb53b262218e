//! Shared helpers and the side-effect capabilities injected into the session.

pub mod browser;
pub mod clipboard;
pub mod text;

pub use browser::{LinkOpener, SystemBrowser};
pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use text::{truncate_start_with_ellipsis, truncate_with_ellipsis};
