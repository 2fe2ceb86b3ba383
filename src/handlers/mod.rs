//! Event Handlers
//!
//! This module contains handlers for the two sources of change:
//! - api: Responses from the background request service
//! - keyboard: User keyboard input
//!
//! Both take `&mut App` and mutate only the model slice that belongs to the
//! component the event is for.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
