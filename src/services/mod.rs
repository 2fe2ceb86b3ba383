//! External Services
//!
//! This module contains background tasks that talk to the backend:
//! - api: Request queue worker that executes backend calls off the UI loop
//! - poller: Periodic capture status poller with a cancellable lifecycle

pub mod api;
pub mod poller;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse, CatalogTarget, Priority, StatusOrigin};
pub use poller::spawn_status_poller;
