//! Shotdeck
//!
//! Orchestration core for a screen-capture/analysis backend: capture status
//! polling, session catalog, session detail, search and video export.
//! The terminal front end in `main.rs` only renders the model and forwards keys.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod utils;

pub use app::App;

/// Top-level views the user can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Sessions,
    SessionDetail,
    Capture,
    Search,
    Export,
}

impl View {
    /// Views reachable from the tab bar, in display order
    pub const TABS: [View; 4] = [View::Sessions, View::Capture, View::Search, View::Export];

    pub fn as_str(&self) -> &str {
        match self {
            View::Sessions => "Sessions",
            View::SessionDetail => "Session",
            View::Capture => "Capture",
            View::Search => "Search",
            View::Export => "Export",
        }
    }
}
