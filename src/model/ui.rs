//! UI Model
//!
//! Transient UI state that does not belong to any component.

use std::time::Instant;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u128 = 3000;

/// UI feedback and lifecycle flags
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether the help legend is expanded
    pub show_help: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            toast_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
