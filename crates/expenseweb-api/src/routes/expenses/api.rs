//! Expense endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_expenses: Authoritative list (JSON)
//! - api_totals: Category totals (JSON)
//! - api_state: Draft, edit marker and list (JSON)
//! - htmx_tracker: Current tracker fragment
//! - htmx_update_field: Sync draft fields as the user types
//! - htmx_submit: Create or update from the draft
//! - htmx_edit: Enter edit mode for a record
//! - htmx_delete: Delete a record

use crate::{parse_form_body, ApiError, AppState};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use expenseweb_core::{CategoryTotals, CoreError, DraftField, Expense, ExpenseId, TrackerState};

use super::page::render_tracker;

/// Get the authoritative list (JSON API)
pub async fn api_expenses(state: axum::extract::State<AppState>) -> Json<Vec<Expense>> {
    Json(state.controller.snapshot().await.expenses)
}

/// Get category totals in first-appearance order (JSON API)
pub async fn api_totals(state: axum::extract::State<AppState>) -> Json<CategoryTotals> {
    Json(state.controller.totals().await)
}

/// Get the whole view state (JSON API)
pub async fn api_state(state: axum::extract::State<AppState>) -> Json<TrackerState> {
    Json(state.controller.snapshot().await)
}

/// HTMX: Tracker fragment for the current state
pub async fn htmx_tracker(state: axum::extract::State<AppState>) -> Html<String> {
    Html(render_current(&state, None).await)
}

/// HTMX: Replace draft fields from an urlencoded body
pub async fn htmx_update_field(
    state: axum::extract::State<AppState>,
    body: String,
) -> Result<StatusCode, ApiError> {
    apply_fields(&state, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// HTMX: Submit the draft
///
/// The posted form values are applied to the draft first, so a submit
/// always sees what the user typed.
pub async fn htmx_submit(
    state: axum::extract::State<AppState>,
    body: String,
) -> Result<Html<String>, ApiError> {
    apply_fields(&state, &body).await?;

    // An incomplete draft is a silent no-op; only request failures show a notice
    let error = state.controller.submit().await.err();
    Ok(Html(render_current(&state, error.as_ref()).await))
}

/// HTMX: Load a record into the form
pub async fn htmx_edit(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<Html<String>, ApiError> {
    let id: ExpenseId = path.0.parse()?;
    state.controller.enter_edit_by_id(id).await?;
    Ok(Html(render_current(&state, None).await))
}

/// HTMX: Delete a record and show the re-fetched list
pub async fn htmx_delete(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<Html<String>, ApiError> {
    let id: ExpenseId = path.0.parse()?;
    let error = state.controller.delete(id).await.err();
    Ok(Html(render_current(&state, error.as_ref()).await))
}

/// Apply posted fields to the draft; an unknown name rejects the whole body
async fn apply_fields(state: &AppState, body: &str) -> Result<(), ApiError> {
    let fields = parse_form_body(body)
        .into_iter()
        .map(|(name, value)| name.parse::<DraftField>().map(|field| (field, value)))
        .collect::<Result<Vec<_>, CoreError>>()?;

    for (field, value) in fields {
        state.controller.update_field(field, value).await;
    }
    Ok(())
}

async fn render_current(state: &AppState, error: Option<&CoreError>) -> String {
    let snapshot = state.controller.snapshot().await;
    let totals = CategoryTotals::from_expenses(&snapshot.expenses);
    render_tracker(&snapshot, &totals, &state.config, error)
}
