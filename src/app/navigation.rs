//! Navigation orchestration methods
//!
//! View switching and list selection. Switching never cancels in-flight
//! requests; late responses still land in their own slice.

use crate::logic::navigation::{next_selection, next_tab, prev_selection, prev_tab};
use crate::{App, View};

impl App {
    /// Activate a view and trigger its eager load, if it has one
    pub fn switch_view(&mut self, view: View) {
        self.model.view = view;
        match view {
            View::Sessions => self.load_sessions(),
            View::Export => self.load_export_choices(),
            // Search loads on submit, capture status is already polled,
            // detail loads through open_session
            View::Search | View::Capture | View::SessionDetail => {}
        }
        self.notify_changed();
    }

    pub fn next_view(&mut self) {
        self.switch_view(next_tab(self.model.view));
    }

    pub fn prev_view(&mut self) {
        self.switch_view(prev_tab(self.model.view));
    }

    /// Leave the detail view for the session list
    pub fn back(&mut self) {
        if self.model.view == View::SessionDetail {
            self.switch_view(View::Sessions);
        }
    }

    pub fn select_next(&mut self) {
        self.move_selection(next_selection);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(prev_selection);
    }

    fn move_selection(&mut self, step: fn(Option<usize>, usize) -> Option<usize>) {
        let model = &mut self.model;
        match model.view {
            View::Sessions => {
                let len = model.catalog.visible().len();
                model.catalog.selected = step(model.catalog.selected, len);
            }
            View::SessionDetail => {
                let len = model
                    .detail
                    .detail
                    .as_ref()
                    .map(|d| d.screenshots.len())
                    .unwrap_or(0);
                model.detail.selected_screenshot = step(model.detail.selected_screenshot, len);
            }
            View::Search => {
                let len = model.search.results().len();
                model.search.selected = step(model.search.selected, len);
            }
            View::Export => {
                let len = model.export.choices.len();
                model.export.selected = step(model.export.selected, len);
                model.export.validation = None;
            }
            View::Capture => {}
        }
        self.notify_changed();
    }
}
