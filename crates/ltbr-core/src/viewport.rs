//! Viewport offset math for scrollable lists.

/// First visible index that keeps `selected` vertically centered.
///
/// Never scrolls before the start or past `count - height`.
pub fn centered_offset(selected: usize, count: usize, height: usize) -> usize {
    let max_offset = count.saturating_sub(height);
    selected.saturating_sub(height / 2).min(max_offset)
}
