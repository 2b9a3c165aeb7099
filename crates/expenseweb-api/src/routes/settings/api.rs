//! Settings API endpoints - JSON API

use crate::AppState;

/// Effective configuration, after defaults and CLI overrides
pub async fn api_settings(state: axum::extract::State<AppState>) -> axum::Json<expenseweb_config::Config> {
    axum::Json(state.config.clone())
}
