//! Expense tracker core
//!
//! - models: expense records and request payloads
//! - types: form field names
//! - state: draft, edit marker and authoritative list transitions
//! - reports: per-category totals
//! - gateway: remote store trait and REST implementation
//! - controller: ties state and gateway together

pub mod controller;
pub mod error;
pub mod gateway;
pub mod models;
pub mod reports;
pub mod state;
pub mod types;

pub use controller::{ExpenseController, SubmitOutcome};
pub use error::{CoreError, CoreResult};
pub use gateway::{ExpenseGateway, GatewayRef, RestExpenseGateway};
pub use models::{Expense, ExpenseId, ExpensePayload};
pub use reports::{CategoryTotal, CategoryTotals};
pub use state::{Draft, SubmitPlan, SubmitRules, TrackerState};
pub use types::DraftField;
