//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - capture: Capture status reconciliation (indicator, label, toggle action)
//! - catalog: Session filtering and export eligibility
//! - detail: Aggregate statistics for an open session
//! - errors: Transport error classification and formatting
//! - formatting: Display formatting (timestamps, truncation)
//! - navigation: Selection cycling for lists and tabs
//! - path: Screenshot path resolution against the serving route
//! - relevance: Display relevance derivation and bucketing
//! - validation: Local checks performed before any request is issued

pub mod capture;
pub mod catalog;
pub mod detail;
pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod path;
pub mod relevance;
pub mod validation;
