//! Navigation selection logic
//!
//! Pure functions for calculating navigation selection indices with wrapping behavior.

use crate::View;

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use shotdeck::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use shotdeck::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}

/// Next tab in the tab bar; the detail view counts as Sessions
pub fn next_tab(current: View) -> View {
    let idx = tab_index(current);
    View::TABS[(idx + 1) % View::TABS.len()]
}

/// Previous tab in the tab bar
pub fn prev_tab(current: View) -> View {
    let idx = tab_index(current);
    View::TABS[(idx + View::TABS.len() - 1) % View::TABS.len()]
}

/// Position of a view in the tab bar
pub fn tab_index(view: View) -> usize {
    match view {
        View::SessionDetail => 0,
        other => View::TABS.iter().position(|v| *v == other).unwrap_or(0),
    }
}
