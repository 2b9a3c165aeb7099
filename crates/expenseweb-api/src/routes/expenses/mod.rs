//! Expense routes - the single tracker page
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page and fragment rendering

pub mod api;
pub mod page;

pub use api::{
    api_expenses,
    api_totals,
    api_state,
    htmx_tracker,
    htmx_update_field,
    htmx_submit,
    htmx_edit,
    htmx_delete,
};

pub use page::page_tracker;
