//! Basic types for the tracker form

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Editable field of the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Amount,
    Category,
    Date,
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Amount,
        DraftField::Category,
        DraftField::Date,
    ];

    /// Form input name
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Amount => "amount",
            DraftField::Category => "category",
            DraftField::Date => "date",
        }
    }
}

impl std::str::FromStr for DraftField {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(DraftField::Title),
            "amount" => Ok(DraftField::Amount),
            "category" => Ok(DraftField::Category),
            "date" => Ok(DraftField::Date),
            _ => Err(CoreError::ValidationError {
                message: format!("Unknown form field: {}", s),
            }),
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
