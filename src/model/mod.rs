//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into one sub-model per component, and each
//! component writes only to its own slice:
//!
//! - **CaptureModel**: Last fetched capture status and its reconciliation
//! - **CatalogModel**: Session list, filter text, selection
//! - **DetailModel**: The open session, its screenshots and aggregates
//! - **SearchModel**: Query input and the latest search outcome
//! - **ExportModel**: Export selector, in-flight flag, last outcome
//! - **UiModel**: Toasts and quit flag
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App and the request service
//! - Pure accessors: Helper methods are side-effect free

pub mod capture;
pub mod catalog;
pub mod detail;
pub mod export;
pub mod search;
pub mod types;
pub mod ui;

pub use capture::CaptureModel;
pub use catalog::CatalogModel;
pub use detail::DetailModel;
pub use export::ExportModel;
pub use search::SearchModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::Stats;
use crate::View;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Currently active view
    pub view: View,

    /// Backend totals shown in the header
    pub stats: Option<Stats>,

    pub capture: CaptureModel,
    pub catalog: CatalogModel,
    pub detail: DetailModel,
    pub search: SearchModel,
    pub export: ExportModel,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model showing the session list
    pub fn new() -> Self {
        Self {
            view: View::Sessions,
            stats: None,
            capture: CaptureModel::new(),
            catalog: CatalogModel::new(),
            detail: DetailModel::new(),
            search: SearchModel::new(),
            export: ExportModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Whether a text field is currently receiving keystrokes
    pub fn is_editing_text(&self) -> bool {
        self.capture.start_form.is_some()
            || (self.view == View::Sessions && self.catalog.filter_editing)
            || (self.view == View::Search && self.search.editing)
    }

    /// Whether a modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.capture.start_form.is_some() || self.capture.confirm_stop.is_some()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
