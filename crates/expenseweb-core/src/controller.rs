//! Form/edit state controller
//!
//! Drives `TrackerState` through the gateway. Every mutation is followed by
//! a full re-fetch; there is no optimistic patching of the list. The state
//! lock is only taken between gateway calls, never across one.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::gateway::GatewayRef;
use crate::models::{Expense, ExpenseId};
use crate::reports::CategoryTotals;
use crate::state::{SubmitPlan, SubmitRules, TrackerState};
use crate::types::DraftField;

/// Result of a submit that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A field was missing; nothing was sent and nothing changed
    Incomplete { missing: Vec<DraftField> },
    Created(Expense),
    Updated(Expense),
}

/// Owner of one tracker view's state
pub struct ExpenseController {
    gateway: GatewayRef,
    rules: SubmitRules,
    state: RwLock<TrackerState>,
    fetch_seq: AtomicU64,
    logger: Box<dyn ErrorLogger>,
}

impl ExpenseController {
    pub fn new(gateway: GatewayRef, rules: SubmitRules) -> Self {
        Self {
            gateway,
            rules,
            state: RwLock::new(TrackerState::new()),
            fetch_seq: AtomicU64::new(0),
            logger: Box::new(DefaultErrorLogger),
        }
    }

    /// Replace the default `log`-backed error logger
    pub fn with_logger(mut self, logger: Box<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn rules(&self) -> SubmitRules {
        self.rules
    }

    /// Fetch the list and replace the local copy
    ///
    /// Returns `Ok(false)` when a fetch issued later has already been
    /// applied; the older response is dropped.
    pub async fn refresh(&self) -> CoreResult<bool> {
        let ticket = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let expenses = match self.gateway.list().await {
            Ok(expenses) => expenses,
            Err(e) => {
                self.logger.log_error(
                    &e,
                    &ErrorContext::new("fetch").with_data("ticket", serde_json::json!(ticket)),
                );
                return Err(e);
            }
        };

        let count = expenses.len();
        let applied = self.state.write().await.apply_fetch(ticket, expenses);
        if applied {
            log::debug!("Applied fetch #{} with {} expenses", ticket, count);
        } else {
            log::debug!("Discarded stale fetch #{}", ticket);
        }
        Ok(applied)
    }

    /// Open the view: clear the form, then load the list
    ///
    /// Fetch failures are logged only.
    pub async fn mount(&self) {
        self.state.write().await.reset_view();
        let _ = self.refresh().await;
    }

    /// Re-fetch after a mutation; failures are logged only
    async fn resync(&self) {
        let _ = self.refresh().await;
    }

    pub async fn update_field(&self, field: DraftField, value: String) {
        self.state.write().await.update_field(field, value);
    }

    /// Enter edit mode for a record
    pub async fn enter_edit(&self, expense: &Expense) {
        log::debug!("Editing expense {}", expense.id);
        self.state.write().await.enter_edit(expense);
    }

    /// Enter edit mode for a record of the current list
    pub async fn enter_edit_by_id(&self, id: ExpenseId) -> CoreResult<Expense> {
        let mut state = self.state.write().await;
        let expense = state
            .find(id)
            .cloned()
            .ok_or_else(|| CoreError::ExpenseNotFound { id: id.to_string() })?;
        state.enter_edit(&expense);
        log::debug!("Editing expense {}", id);
        Ok(expense)
    }

    /// Submit the draft as a create or an update
    ///
    /// On failure the draft and edit marker are left as they were.
    pub async fn submit(&self) -> CoreResult<SubmitOutcome> {
        let plan = self.state.read().await.plan_submit(&self.rules);

        let outcome = match plan {
            SubmitPlan::Incomplete { missing } => {
                log::debug!("Submit dropped, missing fields: {:?}", missing);
                return Ok(SubmitOutcome::Incomplete { missing });
            }
            SubmitPlan::Create(payload) => {
                let created = self.gateway.create(&payload).await.map_err(|e| {
                    self.logger.log_error(&e, &ErrorContext::new("create"));
                    e
                })?;
                log::info!("Created expense {} ({})", created.id, created.title);
                self.state.write().await.complete_create();
                SubmitOutcome::Created(created)
            }
            SubmitPlan::Update(id, payload) => {
                let updated = self.gateway.update(id, &payload).await.map_err(|e| {
                    self.logger.log_error(
                        &e,
                        &ErrorContext::new("update").with_data("expense_id", serde_json::json!(id.0)),
                    );
                    e
                })?;
                log::info!("Updated expense {}", id);
                self.state.write().await.complete_update();
                SubmitOutcome::Updated(updated)
            }
        };

        self.resync().await;
        Ok(outcome)
    }

    /// Delete a record, then re-fetch whether or not the delete succeeded
    pub async fn delete(&self, id: ExpenseId) -> CoreResult<()> {
        let result = self.gateway.delete(id).await;
        match &result {
            Ok(()) => log::info!("Deleted expense {}", id),
            Err(e) => self.logger.log_error(
                e,
                &ErrorContext::new("delete").with_data("expense_id", serde_json::json!(id.0)),
            ),
        }
        self.resync().await;
        result
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> TrackerState {
        self.state.read().await.clone()
    }

    /// Totals of the current list
    pub async fn totals(&self) -> CategoryTotals {
        CategoryTotals::from_expenses(&self.state.read().await.expenses)
    }
}

// ==================== Tests ====================
