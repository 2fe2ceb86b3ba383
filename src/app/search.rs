//! Search orchestration methods

use crate::logic::validation::{validate_query, ValidationError};
use crate::model::search::SearchState;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Submit the typed query; empty queries never reach the backend
    pub fn submit_search(&mut self) -> Result<(), ValidationError> {
        let query = match validate_query(&self.model.search.input) {
            Ok(query) => query,
            Err(e) => {
                self.model.search.validation = Some(e.to_string());
                self.notify_changed();
                return Err(e);
            }
        };

        let search = &mut self.model.search;
        search.validation = None;
        search.editing = false;
        search.submitted = Some(query.clone());
        search.state = SearchState::Searching;
        search.selected = None;

        self.send(ApiRequest::Search { query });
        self.notify_changed();
        Ok(())
    }
}
