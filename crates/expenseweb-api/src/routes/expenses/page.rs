//! Tracker page rendering
//!
//! Endpoints:
//! - page_tracker: Full page, fetches the list on load
//!
//! Helper functions:
//! - render_tracker: Form, table and totals as one swappable fragment
//! - render_form / render_table / render_totals: the three sections

use crate::AppState;
use expenseweb_config::{Config, CurrencyConfig};
use expenseweb_core::{CategoryTotals, CoreError, Draft, Expense, TrackerState};
use expenseweb_utils::{escape_html, number_to_text};

/// Tracker page - loading it counts as mounting the view
pub async fn page_tracker(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    state.controller.mount().await;
    let snapshot = state.controller.snapshot().await;
    let totals = CategoryTotals::from_expenses(&snapshot.expenses);

    let inner_content = render_tracker(&snapshot, &totals, &state.config, None);

    axum::response::Html(crate::page_response(&headers, &state.config.ui.title, &inner_content))
}

/// Whole tracker fragment, the target of every HTMX action
pub fn render_tracker(
    state: &TrackerState,
    totals: &CategoryTotals,
    config: &Config,
    error: Option<&CoreError>,
) -> String {
    let notice_html = match error {
        Some(error) if config.ui.show_errors => render_notice(error),
        _ => String::new(),
    };

    format!(
        r#"<div id='tracker' class='max-w-4xl mx-auto bg-white rounded-xl shadow-sm p-6'>
    <h1 class='text-2xl font-bold mb-4'>💰 {}</h1>
    {}
    {}
    <h2 class='text-xl font-semibold mt-6 mb-2'>Expenses List</h2>
    {}
    <h2 class='text-xl font-semibold mt-6 mb-2'>Total by Category</h2>
    {}
</div>"#,
        escape_html(&config.ui.title),
        notice_html,
        render_form(&state.draft, state.is_editing()),
        render_table(&state.expenses, &config.currency.symbol),
        render_totals(totals, &config.currency)
    )
}

/// Dismissable notice for a failed action
fn render_notice(error: &CoreError) -> String {
    let hint = error
        .hint()
        .map(|hint| format!("<p class='text-sm text-red-500 mt-1'>{}</p>", escape_html(hint)))
        .unwrap_or_default();
    format!(
        r#"<div class='bg-red-50 border border-red-200 rounded-lg p-4 mb-4' onclick='this.remove()'><div class='flex items-center gap-2'><span class='text-red-600'>✗</span><span class='font-medium text-red-800'>Request failed</span></div><p class='text-sm text-red-600 mt-1'>{}</p>{}</div>"#,
        escape_html(&error.to_string()),
        hint
    )
}

/// Expense form, bound to the draft
pub fn render_form(draft: &Draft, editing: bool) -> String {
    let submit_label = if editing { "Update Expense" } else { "Add Expense" };
    // Inputs sync the draft as the user types; the form posts all four on submit
    let sync = "hx-post='/form/field' hx-trigger='input changed delay:300ms' hx-swap='none'";

    format!(
        r#"<form hx-post='/expenses/submit' hx-target='#tracker' hx-swap='outerHTML' class='grid grid-cols-1 md:grid-cols-5 gap-3'>
        <input type='text' name='title' value='{}' placeholder='Title' {} class='px-3 py-2 border rounded-lg'>
        <input type='number' step='any' name='amount' value='{}' placeholder='Amount' {} class='px-3 py-2 border rounded-lg'>
        <input type='text' name='category' value='{}' placeholder='Category (Food, Travel...)' {} class='px-3 py-2 border rounded-lg'>
        <input type='date' name='date' value='{}' {} class='px-3 py-2 border rounded-lg'>
        <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>{}</button>
    </form>"#,
        escape_html(&draft.title),
        sync,
        escape_html(&draft.amount),
        sync,
        escape_html(&draft.category),
        sync,
        escape_html(&draft.date),
        sync,
        submit_label
    )
}

/// Table of the authoritative list
pub fn render_table(expenses: &[Expense], currency_symbol: &str) -> String {
    let mut rows = String::new();
    for expense in expenses {
        rows.push_str(&format!(
            r#"<tr class='border-b'>
            <td class='py-2'>{}</td>
            <td class='py-2'>{}</td>
            <td class='py-2'>{}</td>
            <td class='py-2'>{}</td>
            <td class='py-2 flex gap-2'>
                <button hx-post='/expenses/{}/edit' hx-target='#tracker' hx-swap='outerHTML' class='px-3 py-1 text-sm border rounded-lg hover:bg-gray-50'>Edit</button>
                <button hx-delete='/expenses/{}' hx-target='#tracker' hx-swap='outerHTML' class='px-3 py-1 text-sm text-red-600 border border-red-200 rounded-lg hover:bg-red-50'>Delete</button>
            </td>
        </tr>"#,
            escape_html(&expense.title),
            number_to_text(expense.amount),
            escape_html(&expense.category),
            escape_html(&expense.date),
            expense.id,
            expense.id
        ));
    }

    format!(
        r#"<table class='w-full text-left'>
        <thead><tr class='border-b text-gray-600'><th>Title</th><th>Amount ({})</th><th>Category</th><th>Date</th><th>Actions</th></tr></thead>
        <tbody>{}</tbody>
    </table>"#,
        escape_html(currency_symbol),
        rows
    )
}

/// Totals list, rounded for display only
pub fn render_totals(totals: &CategoryTotals, currency: &CurrencyConfig) -> String {
    let items: Vec<String> = totals
        .iter()
        .map(|entry| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape_html(&entry.category),
                currency.format(entry.total)
            )
        })
        .collect();
    format!("<ul class='space-y-1'>{}</ul>", items.join(""))
}
