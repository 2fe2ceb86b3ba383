//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, NaiveDateTime};
use unicode_width::UnicodeWidthChar;

/// Format a session creation timestamp as "YYYY-MM-DD HH:MM"
///
/// Accepts RFC 3339 and naive ISO timestamps (with or without fractional
/// seconds). Anything else is shown unchanged.
///
/// # Examples
/// ```
/// use shotdeck::logic::formatting::format_created_at;
///
/// assert_eq!(format_created_at("2025-03-01T10:15:42Z"), "2025-03-01 10:15");
/// assert_eq!(format_created_at("2025-03-01T10:15:42.123456"), "2025-03-01 10:15");
/// assert_eq!(format_created_at("yesterday"), "yesterday");
/// ```
pub fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Truncate to a display width, appending "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            // Make room for the ellipsis
            while width + 1 > max_width {
                match out.pop() {
                    Some(c) => width -= c.width().unwrap_or(0),
                    None => return String::new(),
                }
            }
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }

    out
}
