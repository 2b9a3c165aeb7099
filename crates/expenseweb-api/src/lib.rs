//! HTTP server rendering the expense tracker with HTMX
//!
//! Routes are organized into modules:
//! - routes::expenses: Tracker page, form actions, JSON mirror
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use expenseweb_config::Config;
use expenseweb_core::ExpenseController;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ExpenseController>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::expenses::{
        api_expenses, api_state, api_totals, htmx_delete, htmx_edit, htmx_submit, htmx_tracker,
        htmx_update_field, page_tracker,
    };
    use routes::settings::api_settings;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/expenses", get(api_expenses))
        .route("/api/totals", get(api_totals))
        .route("/api/state", get(api_state))
        .route("/api/settings", get(api_settings))
        // HTMX page routes
        .route("/", get(page_tracker))
        // HTMX partial routes
        .route("/tracker", get(htmx_tracker))
        .route("/form/field", post(htmx_update_field))
        .route("/expenses/submit", post(htmx_submit))
        .route("/expenses/:id/edit", post(htmx_edit))
        .route("/expenses/:id", delete(htmx_delete))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900 p-6">
    {}
</body>
</html>"#,
        expenseweb_utils::escape_html(title),
        content
    )
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

/// Parse an `application/x-www-form-urlencoded` body, keeping pair order
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    let decode = |raw: &str| {
        let raw = raw.replace('+', " ");
        urlencoding::decode(&raw)
            .map(|s| s.into_owned())
            .unwrap_or(raw)
    };

    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Bind and serve until the process is stopped
pub async fn start_server(config: Config, controller: Arc<ExpenseController>) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let upstream = config.expenses_url().to_string();
    let state = AppState { controller, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting expense tracker on http://{}", addr);
    log::info!("Remote expense API: {}", upstream);
    log::info!("Available routes:");
    log::info!("  - / (Tracker)");
    log::info!("  - /tracker, /form/field, /expenses/* (HTMX actions)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped gracefully");
    Ok(())
}
