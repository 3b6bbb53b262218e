pub mod read;
pub mod stats;

use std::path::Path;

/// Display name for a document: its file name, or the path as given.
fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
