//! Local validation
//!
//! Checks that run before any request is issued. A failure here means no
//! backend call is made; the error text is shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Session name is required")]
    EmptySessionName,
    #[error("Enter a search query")]
    EmptyQuery,
    #[error("Select a session to export")]
    NoSessionSelected,
    #[error("An export is already running")]
    ExportInFlight,
    #[error("Session already has analyzed screenshots")]
    AlreadyAnalyzed,
}

/// Trim and require a non-empty session name
pub fn validate_session_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySessionName);
    }
    Ok(trimmed.to_string())
}

/// Optional description: blank reads as absent
pub fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim and require a non-empty search query
pub fn validate_query(query: &str) -> Result<String, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(trimmed.to_string())
}
