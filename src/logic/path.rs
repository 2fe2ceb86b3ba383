//! Screenshot path resolution
//!
//! The backend reports absolute file paths for screenshots but serves them
//! from a fixed route keyed by the path relative to its storage root.

/// Where a screenshot's image can be fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotSource {
    Served(String),
    /// Storage root not found in the path; render a broken-image placeholder
    Placeholder,
}

impl ScreenshotSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            ScreenshotSource::Served(url) => Some(url),
            ScreenshotSource::Placeholder => None,
        }
    }
}

/// Path of a screenshot relative to the storage root
///
/// The storage root may appear anywhere in the path (the backend reports
/// paths under its own working directory) but only on whole path segments.
/// Backslashes are normalized first.
pub fn storage_relative_path(file_path: &str, storage_root: &str) -> Option<String> {
    let normalized = file_path.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
    let root: Vec<&str> = storage_root
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();
    if root.is_empty() {
        return None;
    }

    let start = segments
        .windows(root.len())
        .position(|window| window == root.as_slice())?;
    let relative = &segments[start + root.len()..];
    if relative.is_empty() {
        None
    } else {
        Some(relative.join("/"))
    }
}

/// Resolve the URL a screenshot is served from
///
/// # Examples
/// ```
/// use shotdeck::logic::path::{resolve_screenshot, ScreenshotSource};
///
/// let source = resolve_screenshot(
///     "/srv/app/data/screenshots/standup/0001.png",
///     "data/screenshots/",
///     "http://localhost:8000",
///     "/screenshots/",
/// );
/// assert_eq!(
///     source,
///     ScreenshotSource::Served("http://localhost:8000/screenshots/standup/0001.png".to_string())
/// );
///
/// let missing = resolve_screenshot("/tmp/other.png", "data/screenshots/", "http://localhost:8000", "/screenshots/");
/// assert_eq!(missing, ScreenshotSource::Placeholder);
/// ```
pub fn resolve_screenshot(
    file_path: &str,
    storage_root: &str,
    base_url: &str,
    route: &str,
) -> ScreenshotSource {
    match storage_relative_path(file_path, storage_root) {
        Some(relative) => {
            let encoded: Vec<_> = relative.split('/').map(urlencoding::encode).collect();
            ScreenshotSource::Served(format!(
                "{}/{}/{}",
                base_url.trim_end_matches('/'),
                route.trim_matches('/'),
                encoded.join("/")
            ))
        }
        None => ScreenshotSource::Placeholder,
    }
}
