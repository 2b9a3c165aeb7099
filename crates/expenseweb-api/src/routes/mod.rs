//! Route modules for the API server
//!
//! - expenses: Tracker page, HTMX actions and JSON mirror of the view state
//! - settings: Effective configuration
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: HTMX page rendering

pub mod expenses;
pub mod settings;
