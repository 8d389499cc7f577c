//! Transaction model
//!
//! A transaction is a single income or expense entry. Records are created
//! once, validated, and never edited afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The other variant (used by the entry form toggle)
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A single ledger entry
///
/// Field names on disk are `id`, `date`, `type`, `category`, `desc`, `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (creation time in milliseconds)
    pub id: TransactionId,

    /// Creation date, already formatted for display
    pub date: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    #[serde(rename = "desc")]
    pub description: String,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        date: impl Into<String>,
        kind: TransactionType,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            kind,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with its direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    ///
    /// Checks run in the order users see them reported: description first,
    /// then amount, then category.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::InvalidAmount);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}] {}",
            self.date, self.kind, self.description, self.category, self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    InvalidAmount,
    MissingCategory,
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Please enter description"),
            Self::InvalidAmount => write!(f, "Enter valid amount"),
            Self::MissingCategory => write!(f, "Please choose a category"),
            Self::UnknownType(s) => {
                write!(f, "Unknown type '{}': use income or expense", s)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionType, amount: Money) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1),
            "14/03/2026",
            kind,
            "Food",
            "Groceries",
            amount,
        )
    }

    #[test]
    fn test_signed_amount() {
        let income = sample(TransactionType::Income, Money::from_major(100));
        assert!(income.is_income());
        assert_eq!(income.signed_amount(), Money::from_major(100));

        let expense = sample(TransactionType::Expense, Money::from_major(100));
        assert!(expense.is_expense());
        assert_eq!(expense.signed_amount(), Money::from_major(-100));
    }

    #[test]
    fn test_validate() {
        assert!(sample(TransactionType::Income, Money::from_major(1)).validate().is_ok());

        let mut txn = sample(TransactionType::Income, Money::zero());
        assert_eq!(txn.validate(), Err(TransactionValidationError::InvalidAmount));

        txn.description = "   ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));

        let mut txn = sample(TransactionType::Expense, Money::from_major(5));
        txn.category = String::new();
        assert_eq!(txn.validate(), Err(TransactionValidationError::MissingCategory));
    }

    #[test]
    fn test_type_parsing() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("EXPENSE".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
        assert_eq!(TransactionType::Income.toggled(), TransactionType::Expense);
    }

    #[test]
    fn test_wire_format() {
        let txn = Transaction::new(
            TransactionId::from_raw(1710400000000),
            "14/03/2026",
            TransactionType::Income,
            "Salary",
            "March pay",
            Money::from_major(50000),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1710400000000i64,
                "date": "14/03/2026",
                "type": "income",
                "category": "Salary",
                "desc": "March pay",
                "amount": 50000
            })
        );
    }
}
