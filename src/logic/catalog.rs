//! Session catalog logic
//!
//! Pure functions over the last loaded session list. Nothing here touches
//! the network; filtering runs on every keystroke.

use crate::api::Session;

/// Case-insensitive substring match against name or description
pub fn session_matches(session: &Session, query: &str) -> bool {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return true;
    }

    session.name.to_lowercase().contains(&query_lower)
        || session
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&query_lower)
}

/// Filter sessions by query, preserving backend order
///
/// # Examples
/// ```
/// use shotdeck::api::Session;
/// use shotdeck::logic::catalog::filter_sessions;
///
/// let sessions: Vec<Session> = serde_json::from_str(
///     r#"[{"id": 1, "name": "Standup"}, {"id": 2, "name": "Review", "description": "weekly standup notes"}]"#,
/// ).unwrap();
///
/// assert_eq!(filter_sessions(&sessions, "STANDUP").len(), 2);
/// assert_eq!(filter_sessions(&sessions, "review").len(), 1);
/// assert_eq!(filter_sessions(&sessions, "").len(), 2);
/// ```
pub fn filter_sessions<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    sessions
        .iter()
        .filter(|session| session_matches(session, query))
        .collect()
}

/// Sessions that can be exported: at least one analyzed screenshot
pub fn exportable_sessions(sessions: Vec<Session>) -> Vec<Session> {
    sessions
        .into_iter()
        .filter(|session| session.analyzed_count > 0)
        .collect()
}

/// Keep a selection index valid after the list it points into changed
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}
