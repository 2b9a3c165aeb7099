//! Core data models for the expense tracker

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Server-assigned expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub i64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExpenseId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ExpenseId)
            .map_err(|_| CoreError::ValidationError {
                message: format!("Invalid expense id: {}", s),
            })
    }
}

/// Expense record as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    /// A `null` amount from the server decodes as NaN
    #[serde(deserialize_with = "amount_or_nan")]
    pub amount: f64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    /// Calendar date, kept as the server's text
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
}

/// Body of create and update requests
///
/// A NaN amount serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl ExpensePayload {
    /// Build the record the server would return for this payload
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_from_api_json() {
        let json = r#"{"id":1,"title":"Coffee","amount":4.5,"category":"Food","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, ExpenseId(1));
        assert_eq!(expense.title, "Coffee");
        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.date, "2024-01-01");
    }

    #[test]
    fn test_expense_with_nulls() {
        let json = r#"{"id":9,"title":null,"amount":null,"category":"Food","date":null}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.title, "");
        assert!(expense.amount.is_nan());
        assert_eq!(expense.date, "");
    }

    #[test]
    fn test_nan_payload_serializes_as_null() {
        let payload = ExpensePayload {
            title: "Tea".to_string(),
            amount: f64::NAN,
            category: "Food".to_string(),
            date: "2024-02-01".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["amount"].is_null());
        assert_eq!(json["title"], "Tea");
    }

    #[test]
    fn test_expense_id_parse() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId(42));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert_eq!(ExpenseId(7).to_string(), "7");
    }
}
