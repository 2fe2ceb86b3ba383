//! Catalog orchestration methods
//!
//! Loading the session list and the keystroke-driven filter.

use crate::logic;
use crate::model::LoadState;
use crate::services::api::{ApiRequest, CatalogTarget};
use crate::App;

impl App {
    /// Request the full session list for the catalog
    pub fn load_sessions(&mut self) {
        self.model.catalog.state = LoadState::Loading;
        self.send(ApiRequest::ListSessions {
            target: CatalogTarget::Catalog,
        });
        self.notify_changed();
    }

    /// Request the session list for the export selector
    pub fn load_export_choices(&mut self) {
        self.model.export.state = LoadState::Loading;
        self.send(ApiRequest::ListSessions {
            target: CatalogTarget::ExportSelector,
        });
        self.notify_changed();
    }

    /// Replace the filter text; purely local
    pub fn set_catalog_filter(&mut self, query: String) {
        let catalog = &mut self.model.catalog;
        catalog.filter_query = query;
        let visible = catalog.visible().len();
        catalog.selected = logic::catalog::clamp_selection(Some(0), visible);
        self.notify_changed();
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut query = self.model.catalog.filter_query.clone();
        query.push(c);
        self.set_catalog_filter(query);
    }

    pub fn pop_filter_char(&mut self) {
        let mut query = self.model.catalog.filter_query.clone();
        query.pop();
        self.set_catalog_filter(query);
    }

    /// Open the detail view for the highlighted session
    pub fn open_selected_session(&mut self) {
        if let Some(id) = self.model.catalog.selected_session().map(|s| s.id) {
            self.open_session(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Session;
    use crate::app::test_support::{drain, test_app};
    use crate::services::api::ApiRequest;

    fn session(id: i64, name: &str) -> Session {
        Session {
            id,
            name: name.to_string(),
            description: None,
            created_at: String::new(),
            screenshot_count: 0,
            analyzed_count: 0,
            avg_relevance: 0.0,
        }
    }

    #[test]
    fn test_filter_never_requests() {
        let (mut app, mut rx) = test_app();
        app.model.catalog.sessions = vec![session(1, "alpha"), session(2, "beta")];

        app.push_filter_char('b');
        app.push_filter_char('e');
        assert_eq!(app.model.catalog.visible().len(), 1);
        assert_eq!(app.model.catalog.selected, Some(0));

        app.pop_filter_char();
        app.pop_filter_char();
        assert_eq!(app.model.catalog.visible().len(), 2);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_filter_with_no_match_clears_selection() {
        let (mut app, _rx) = test_app();
        app.model.catalog.sessions = vec![session(1, "alpha")];
        app.set_catalog_filter("zzz".to_string());
        assert_eq!(app.model.catalog.selected, None);
    }

    #[test]
    fn test_open_selected_uses_filtered_index() {
        let (mut app, mut rx) = test_app();
        app.model.catalog.sessions = vec![session(1, "alpha"), session(2, "beta")];
        app.set_catalog_filter("beta".to_string());

        app.open_selected_session();
        assert_eq!(drain(&mut rx), vec![ApiRequest::GetSession { id: 2 }]);
    }
}
