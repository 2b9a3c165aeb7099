//! Tracker state and its transitions
//!
//! `TrackerState` holds the authoritative list, the draft and the edit
//! marker. Every change goes through one of the methods below so the draft
//! and the marker always move together.

use serde::{Deserialize, Serialize};

use expenseweb_utils::number_to_text;

use crate::models::{Expense, ExpenseId, ExpensePayload};
use crate::types::DraftField;

/// In-progress form values
///
/// The amount stays raw text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl Draft {
    /// Copy a record's values into a draft
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: number_to_text(expense.amount),
            category: expense.category.clone(),
            date: expense.date.clone(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Amount => &self.amount,
            DraftField::Category => &self.category,
            DraftField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Amount => self.amount = value,
            DraftField::Category => self.category = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that block a submit under the given rules
    pub fn missing_fields(&self, rules: &SubmitRules) -> Vec<DraftField> {
        DraftField::ALL
            .iter()
            .copied()
            .filter(|field| {
                let value = self.get(*field);
                if value.is_empty() {
                    return true;
                }
                *field == DraftField::Amount
                    && rules.zero_amount_is_missing
                    && parse_amount(value) == 0.0
            })
            .collect()
    }

    /// Build the request body, parsing the amount
    pub fn to_payload(&self) -> ExpensePayload {
        ExpensePayload {
            title: self.title.clone(),
            amount: parse_amount(&self.amount),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

/// Parse amount text, NaN when it is not a number
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Rules applied when deciding whether a draft can be submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitRules {
    /// Treat a zero amount as missing
    pub zero_amount_is_missing: bool,
}

impl From<&expenseweb_config::FormConfig> for SubmitRules {
    fn from(form: &expenseweb_config::FormConfig) -> Self {
        Self {
            zero_amount_is_missing: form.zero_amount_is_missing,
        }
    }
}

/// What a submit should do with the current draft
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// At least one field is missing; nothing is sent
    Incomplete { missing: Vec<DraftField> },
    Create(ExpensePayload),
    Update(ExpenseId, ExpensePayload),
}

/// List, draft and edit marker of one tracker view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Authoritative list, as last confirmed by the server
    pub expenses: Vec<Expense>,
    pub draft: Draft,
    /// Record being edited, if any
    pub editing: Option<ExpenseId>,
    /// Ticket of the fetch that produced `expenses`
    pub applied_fetch: u64,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Replace one draft field, leaving the others untouched
    pub fn update_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Load a record into the draft and mark it as being edited
    pub fn enter_edit(&mut self, expense: &Expense) {
        self.draft = Draft::from_expense(expense);
        self.editing = Some(expense.id);
    }

    /// Decide between create, update and nothing
    pub fn plan_submit(&self, rules: &SubmitRules) -> SubmitPlan {
        let missing = self.draft.missing_fields(rules);
        if !missing.is_empty() {
            return SubmitPlan::Incomplete { missing };
        }
        let payload = self.draft.to_payload();
        match self.editing {
            Some(id) => SubmitPlan::Update(id, payload),
            None => SubmitPlan::Create(payload),
        }
    }

    /// A create succeeded
    pub fn complete_create(&mut self) {
        self.draft = Draft::default();
    }

    /// An update succeeded
    pub fn complete_update(&mut self) {
        self.editing = None;
        self.draft = Draft::default();
    }

    /// Start a fresh view: empty draft, no edit marker
    ///
    /// The list and fetch ticket stay, so a fetch still in flight is judged
    /// against the same sequence.
    pub fn reset_view(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
    }

    /// Replace the list with a fetch result unless a newer fetch already landed
    ///
    /// Returns whether the list was replaced.
    pub fn apply_fetch(&mut self, ticket: u64, expenses: Vec<Expense>) -> bool {
        if ticket <= self.applied_fetch {
            return false;
        }
        self.applied_fetch = ticket;
        self.expenses = expenses;
        true
    }
}
