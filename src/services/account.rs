//! Account service
//!
//! Creates accounts and reports their balances. An account's baseline is set
//! here once and never touched again.

use tracing::debug;

use crate::models::{Account, Money};
use crate::storage::Store;

/// Service for account management
pub struct AccountService<'a> {
    store: &'a mut Store,
}

/// An account with the figures shown in listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub account: Account,
    /// Baseline plus the signed sum of the account's transactions. Differs
    /// from `account.balance` by the net of any transfers.
    pub transaction_balance: Money,
    pub transaction_count: usize,
}

impl<'a> AccountService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Create an account whose baseline and current balance are both
    /// `starting_balance`. A blank or over-long name is a no-op.
    pub fn create(&mut self, name: &str, starting_balance: Money) -> Option<Account> {
        let account = Account::with_starting_balance(name.trim(), starting_balance);
        if let Err(e) = account.validate() {
            debug!(reason = %e, "account not created");
            return None;
        }

        self.store.update(|state| state.accounts.push(account.clone()));
        debug!(id = %account.id, name = %account.name, "account created");
        Some(account)
    }

    /// All accounts in creation order
    pub fn list(&self) -> Vec<Account> {
        self.store.get().accounts.clone()
    }

    /// Find an account by name or ID
    pub fn find(&self, identifier: &str) -> Option<Account> {
        self.store.get().find_account(identifier).cloned()
    }

    /// Every account with its transaction-derived balance
    pub fn list_with_balances(&self) -> Vec<AccountSummary> {
        let state = self.store.get();
        state
            .accounts
            .iter()
            .map(|account| {
                let own: Vec<_> = state
                    .transactions
                    .iter()
                    .filter(|t| t.account_id == account.id)
                    .collect();
                AccountSummary {
                    account: account.clone(),
                    transaction_balance: account.starting_balance
                        + own.iter().map(|t| t.signed_amount()).sum::<Money>(),
                    transaction_count: own.len(),
                }
            })
            .collect()
    }

    /// Sum of current balances across all accounts
    pub fn total_balance(&self) -> Money {
        self.store.get().accounts.iter().map(|a| a.balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Transaction, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_create_sets_both_balances() {
        let mut store = Store::in_memory();
        let mut service = AccountService::new(&mut store);

        let account = service.create("Checking", Money::from_units(100)).unwrap();
        assert_eq!(account.starting_balance, Money::from_units(100));
        assert_eq!(account.balance, Money::from_units(100));
        assert_eq!(service.find("checking"), Some(account));
    }

    #[test]
    fn test_blank_name_is_noop() {
        let mut store = Store::in_memory();
        let mut service = AccountService::new(&mut store);
        assert!(service.create("", Money::zero()).is_none());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_list_with_balances() {
        let mut store = Store::in_memory();
        let account = AccountService::new(&mut store)
            .create("Checking", Money::from_units(100))
            .unwrap();
        AccountService::new(&mut store)
            .create("Savings", Money::from_units(7))
            .unwrap();

        store.update(|state| {
            state.record_transaction(Transaction::new(
                TransactionType::Expense,
                Money::from_units(30),
                CategoryId::new(),
                account.id,
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ))
        });

        let service = AccountService::new(&mut store);
        let summaries = service.list_with_balances();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].transaction_balance, Money::from_units(70));
        assert_eq!(summaries[0].transaction_count, 1);
        assert_eq!(summaries[0].account.balance, Money::from_units(70));
        assert_eq!(summaries[1].transaction_count, 0);
        assert_eq!(service.total_balance(), Money::from_units(77));
    }
}
