//! Domain models for spendlog

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Labels offered when a store is first initialized
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Bills",
    "Shopping",
    "Groceries",
    "Food",
    "Transportation",
    "Entertainment",
];

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// ISO-8601 `YYYY-MM-DD` by convention; stored as free text
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// Field set for creating or replacing an expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewExpense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Check the fields the store requires.
    ///
    /// Date and category must be non-empty and the amount must be a finite
    /// number. Zero and negative amounts are accepted, and the date is not
    /// parsed here.
    pub fn validate(&self) -> Result<()> {
        if self.date.trim().is_empty() {
            return Err(Error::InvalidArgument("date is required".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::InvalidArgument("category is required".to_string()));
        }
        if !self.amount.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// An entry in the category registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One aggregate row: a grouping key and the summed amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Total {
    pub key: String,
    pub total: f64,
}

impl Total {
    pub fn new(key: impl Into<String>, total: f64) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

/// Grouping used by a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
    Category,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Category => "category",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "monthly" | "month" => Ok(Self::Monthly),
            "category" | "categories" => Ok(Self::Category),
            _ => Err(format!(
                "Unknown granularity: {} (valid: daily, monthly, category)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
