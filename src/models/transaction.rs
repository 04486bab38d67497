//! Transaction model
//!
//! Amounts are stored as positive values; whether a transaction adds to or
//! takes from its account is carried by [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Parse from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "inflow" => Some(Self::Income),
            "expense" | "out" | "outflow" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePeriod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Some(Self::Daily),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for RecurrencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// Marks a transaction as repeating. Purely informational: nothing creates
/// the future occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// Day of the month the transaction repeats on (1-28)
    pub day_of_month: u8,
    pub period: RecurrencePeriod,
}

impl Recurrence {
    pub const MAX_DAY: u8 = 28;

    pub fn new(day_of_month: u8, period: RecurrencePeriod) -> Self {
        Self {
            day_of_month,
            period,
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=Self::MAX_DAY).contains(&self.day_of_month)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {})", self.period, self.day_of_month)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive; the sign comes from `kind`
    pub amount: Money,

    pub category_id: CategoryId,

    pub account_id: AccountId,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Optional recurrence metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category_id: CategoryId,
        account_id: AccountId,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category_id,
            account_id,
            description: String::new(),
            date,
            recurrence: None,
            created_at: Utc::now(),
        }
    }

    /// Amount with its sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if let Some(recurrence) = self.recurrence {
            if !recurrence.is_valid() {
                return Err(TransactionValidationError::RecurrenceDay(
                    recurrence.day_of_month,
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Recurrence day must be between 1 and 28, got {0}")]
    RecurrenceDay(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(kind: TransactionType, cents: i64) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            CategoryId::new(),
            AccountId::new(),
            date(2025, 1, 15),
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(
            sample(TransactionType::Income, 5000).signed_amount(),
            Money::from_cents(5000)
        );
        assert_eq!(
            sample(TransactionType::Expense, 5000).signed_amount(),
            Money::from_cents(-5000)
        );
    }

    #[test]
    fn test_validation() {
        assert!(sample(TransactionType::Expense, 1).validate().is_ok());
        assert_eq!(
            sample(TransactionType::Expense, 0).validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut txn = sample(TransactionType::Income, 100);
        txn.recurrence = Some(Recurrence::new(29, RecurrencePeriod::Monthly));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::RecurrenceDay(29))
        );
        txn.recurrence = Some(Recurrence::new(28, RecurrencePeriod::Monthly));
        assert!(txn.validate().is_ok());
        assert!(txn.is_recurring());
    }

    #[test]
    fn test_type_serializes_as_type_field() {
        let txn = sample(TransactionType::Income, 100);
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["amount"], 100);
        assert_eq!(value["date"], "2025-01-15");
        assert!(value.get("recurrence").is_none());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("out"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("refund"), None);
        assert_eq!(RecurrencePeriod::parse("Week"), Some(RecurrencePeriod::Weekly));
        assert_eq!(RecurrencePeriod::parse("fortnightly"), None);
    }

    #[test]
    fn test_display() {
        let mut txn = sample(TransactionType::Expense, 5000);
        txn.description = "Groceries".to_string();
        assert_eq!(txn.to_string(), "2025-01-15 Groceries -$50.00");
    }
}
