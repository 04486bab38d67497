//! Account model
//!
//! An account carries two balances. The baseline (`starting_balance`) is fixed
//! when the account is created and is what the balance series builds on. The
//! current `balance` moves with every recorded transaction and transfer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A financial account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Checking")
    pub name: String,

    /// Baseline balance recorded at creation, never recomputed
    pub starting_balance: Money,

    /// Current balance, adjusted by transactions and transfers
    pub balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_starting_balance(name, Money::zero())
    }

    /// Create a new account whose current balance starts at the baseline
    pub fn with_starting_balance(name: impl Into<String>, starting_balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            starting_balance,
            balance: starting_balance,
            created_at: Utc::now(),
        }
    }

    /// Move the current balance by a signed amount
    pub fn adjust(&mut self, delta: Money) {
        self.balance += delta;
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    #[error("Account name cannot be empty")]
    EmptyName,
    #[error("Account name too long ({0} chars, max 100)")]
    NameTooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking");
        assert_eq!(account.name, "Checking");
        assert_eq!(account.starting_balance, Money::zero());
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_with_starting_balance() {
        let account = Account::with_starting_balance("Savings", Money::from_units(1000));
        assert_eq!(account.starting_balance.cents(), 100000);
        assert_eq!(account.balance, account.starting_balance);
    }

    #[test]
    fn test_adjust_leaves_baseline() {
        let mut account = Account::with_starting_balance("Wallet", Money::from_units(100));
        account.adjust(Money::from_units(50));
        account.adjust(-Money::from_units(20));
        assert_eq!(account.balance, Money::from_units(130));
        assert_eq!(account.starting_balance, Money::from_units(100));
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name");
        assert!(account.validate().is_ok());

        account.name = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_display() {
        let account = Account::with_starting_balance("Cash", Money::from_cents(1250));
        assert_eq!(account.to_string(), "Cash ($12.50)");
    }
}
