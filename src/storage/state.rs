//! The complete application state
//!
//! Three flat collections, owned together. Mutating helpers here are pure
//! in-memory operations; persistence happens when the state is committed to
//! a [`Store`](super::Store).

use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountId, Category, CategoryId, Money, Transaction};

/// Label used wherever a reference does not resolve
pub const UNKNOWN: &str = "Unknown";

/// Categories, accounts and transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl BudgetState {
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Find a category by name (case-insensitive) or by ID
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let needle = identifier.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
            .or_else(|| self.categories.iter().find(|c| c.id.matches(identifier)))
    }

    /// Find an account by name (case-insensitive) or by ID
    pub fn find_account(&self, identifier: &str) -> Option<&Account> {
        let needle = identifier.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|a| a.name.to_lowercase() == needle)
            .or_else(|| self.accounts.iter().find(|a| a.id.matches(identifier)))
    }

    /// "icon name" for a category, or [`UNKNOWN`] for a dangling reference
    pub fn category_label(&self, id: CategoryId) -> String {
        self.category(id)
            .map_or_else(|| UNKNOWN.to_string(), |c| c.to_string())
    }

    /// Category name, or [`UNKNOWN`] for a dangling reference
    pub fn category_name(&self, id: CategoryId) -> &str {
        self.category(id).map_or(UNKNOWN, |c| c.name.as_str())
    }

    /// Account name, or [`UNKNOWN`] for a dangling reference
    pub fn account_name(&self, id: AccountId) -> &str {
        self.account(id).map_or(UNKNOWN, |a| a.name.as_str())
    }

    /// Append a transaction and move its account's current balance by the
    /// signed amount. A transaction whose account does not exist is still
    /// recorded; no balance moves.
    pub fn record_transaction(&mut self, txn: Transaction) {
        let delta = txn.signed_amount();
        if let Some(account) = self.accounts.iter_mut().find(|a| a.id == txn.account_id) {
            account.adjust(delta);
        }
        self.transactions.push(txn);
    }

    /// Debit `from` and credit `to` by `amount`.
    ///
    /// No checks: zero, negative, overdraft and self-transfer all go through.
    /// A side that matches no account is skipped. Returns whether each side
    /// was applied as `(debited, credited)`.
    pub fn apply_transfer(&mut self, from: AccountId, to: AccountId, amount: Money) -> (bool, bool) {
        let mut debited = false;
        let mut credited = false;
        for account in &mut self.accounts {
            if account.id == from {
                account.adjust(-amount);
                debited = true;
            }
            if account.id == to {
                account.adjust(amount);
                credited = true;
            }
        }
        (debited, credited)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.accounts.is_empty() && self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn state_with(accounts: Vec<Account>) -> BudgetState {
        BudgetState {
            accounts,
            ..BudgetState::default()
        }
    }

    #[test]
    fn test_record_transaction_moves_balance() {
        let account = Account::with_starting_balance("Checking", Money::from_units(100));
        let id = account.id;
        let mut state = state_with(vec![account]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        state.record_transaction(Transaction::new(
            TransactionType::Income,
            Money::from_units(50),
            CategoryId::new(),
            id,
            date,
        ));
        state.record_transaction(Transaction::new(
            TransactionType::Expense,
            Money::from_units(20),
            CategoryId::new(),
            id,
            date,
        ));

        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.account(id).unwrap().balance, Money::from_units(130));
        assert_eq!(state.account(id).unwrap().starting_balance, Money::from_units(100));
    }

    #[test]
    fn test_record_transaction_with_dangling_account() {
        let mut state = state_with(vec![Account::new("Checking")]);
        let before = state.accounts.clone();
        state.record_transaction(Transaction::new(
            TransactionType::Income,
            Money::from_units(5),
            CategoryId::new(),
            AccountId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        ));
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.accounts, before);
    }

    #[test]
    fn test_transfer_moves_both_sides() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        let b = Account::with_starting_balance("B", Money::from_units(10));
        let (a_id, b_id) = (a.id, b.id);
        let mut state = state_with(vec![a, b]);

        assert_eq!(state.apply_transfer(a_id, b_id, Money::from_units(150)), (true, true));
        assert_eq!(state.account(a_id).unwrap().balance, Money::from_units(-50));
        assert_eq!(state.account(b_id).unwrap().balance, Money::from_units(160));
    }

    #[test]
    fn test_transfer_to_missing_account_only_debits() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        let a_id = a.id;
        let mut state = state_with(vec![a]);

        assert_eq!(
            state.apply_transfer(a_id, AccountId::new(), Money::from_units(30)),
            (true, false)
        );
        assert_eq!(state.account(a_id).unwrap().balance, Money::from_units(70));
    }

    #[test]
    fn test_self_transfer_is_net_zero() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        let a_id = a.id;
        let mut state = state_with(vec![a]);

        assert_eq!(state.apply_transfer(a_id, a_id, Money::from_units(30)), (true, true));
        assert_eq!(state.account(a_id).unwrap().balance, Money::from_units(100));
    }

    #[test]
    fn test_lookup_by_name_or_id() {
        let category = Category::new("Groceries", "🛒");
        let cat_id = category.id;
        let account = Account::new("Main Checking");
        let acc_id = account.id;
        let state = BudgetState {
            categories: vec![category],
            accounts: vec![account],
            transactions: vec![],
        };

        assert_eq!(state.find_category("groceries").map(|c| c.id), Some(cat_id));
        assert_eq!(state.find_category(&cat_id.short()).map(|c| c.id), Some(cat_id));
        assert_eq!(state.find_account("MAIN CHECKING").map(|a| a.id), Some(acc_id));
        assert!(state.find_account("savings").is_none());
    }

    #[test]
    fn test_dangling_labels() {
        let state = BudgetState::default();
        assert_eq!(state.category_label(CategoryId::new()), UNKNOWN);
        assert_eq!(state.account_name(AccountId::new()), UNKNOWN);
        assert!(state.is_empty());
    }
}
