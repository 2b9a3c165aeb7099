//! Remote store gateway
//!
//! The four REST operations of the expense resource behind one trait, plus
//! the `reqwest` implementation used in production.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use expenseweb_config::Config;

use crate::error::{CoreError, CoreResult};
use crate::models::{Expense, ExpenseId, ExpensePayload};

/// Gateway reference type
pub type GatewayRef = Arc<dyn ExpenseGateway>;

/// List/create/update/delete against the expense resource
///
/// Calls are not retried or queued; every failure is returned to the caller.
#[async_trait]
pub trait ExpenseGateway: Send + Sync {
    /// `GET /api/expenses`
    async fn list(&self) -> CoreResult<Vec<Expense>>;

    /// `POST /api/expenses`
    async fn create(&self, payload: &ExpensePayload) -> CoreResult<Expense>;

    /// `PUT /api/expenses/{id}`
    async fn update(&self, id: ExpenseId, payload: &ExpensePayload) -> CoreResult<Expense>;

    /// `DELETE /api/expenses/{id}`
    async fn delete(&self, id: ExpenseId) -> CoreResult<()>;
}

/// Gateway talking JSON over HTTP
pub struct RestExpenseGateway {
    client: reqwest::Client,
    base_url: String,
}

impl RestExpenseGateway {
    /// Create a gateway for a collection URL such as `http://host/api/expenses`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> CoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CoreError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let timeout = match config.api.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(config.expenses_url(), timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ExpenseId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into `CoreError::Remote`
    async fn check(response: reqwest::Response) -> CoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(CoreError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ExpenseGateway for RestExpenseGateway {
    async fn list(&self) -> CoreResult<Vec<Expense>> {
        log::debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;
        let expenses = Self::check(response).await?.json::<Vec<Expense>>().await?;
        log::debug!("Fetched {} expenses", expenses.len());
        Ok(expenses)
    }

    async fn create(&self, payload: &ExpensePayload) -> CoreResult<Expense> {
        log::debug!("POST {}", self.base_url);
        let response = self.client.post(&self.base_url).json(payload).send().await?;
        Ok(Self::check(response).await?.json::<Expense>().await?)
    }

    async fn update(&self, id: ExpenseId, payload: &ExpensePayload) -> CoreResult<Expense> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let response = self.client.put(&url).json(payload).send().await?;
        Ok(Self::check(response).await?.json::<Expense>().await?)
    }

    async fn delete(&self, id: ExpenseId) -> CoreResult<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
