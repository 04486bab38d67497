//! Transaction service
//!
//! Records transactions and lists them. Recording is the only way an
//! account's balance moves apart from transfers and imports.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{AccountId, CategoryId, Money, Recurrence, Transaction, TransactionType};
use crate::reports::Period;
use crate::storage::Store;

use super::filter::{filter_by_period, TransactionFilter};

/// A transaction as entered by the user, before it gets an ID.
///
/// Amount, category, account and date are required. Leaving any of them out
/// (or giving a zero amount) makes [`TransactionService::add`] a no-op.
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub account_id: Option<AccountId>,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
}

impl NewTransaction {
    /// Turn the input into a transaction if every required field is present
    /// and the result is valid
    fn into_transaction(self) -> Option<Transaction> {
        let amount = self.amount.filter(|a| !a.is_zero())?;
        let mut txn = Transaction::new(
            self.kind,
            amount,
            self.category_id?,
            self.account_id?,
            self.date?,
        );
        txn.description = self.description.trim().to_string();
        txn.recurrence = self.recurrence;

        match txn.validate() {
            Ok(()) => Some(txn),
            Err(e) => {
                debug!(reason = %e, "transaction input rejected");
                None
            }
        }
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a mut Store,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Record a transaction and move its account's balance in one commit.
    ///
    /// Returns `None` without touching the store when a required field is
    /// missing. The category and account are not required to exist.
    pub fn add(&mut self, input: NewTransaction) -> Option<Transaction> {
        let Some(txn) = input.into_transaction() else {
            debug!("transaction not added: missing required field");
            return None;
        };

        self.store.update(|state| state.record_transaction(txn.clone()));
        debug!(
            id = %txn.id,
            account = %txn.account_id,
            amount = %txn.signed_amount(),
            "transaction added"
        );
        Some(txn)
    }

    /// Transactions in `period` that pass `filter`, newest first, at most
    /// `limit` of them
    pub fn list(
        &self,
        period: &Period,
        filter: &TransactionFilter,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> =
            filter_by_period(&self.store.get().transactions, period, today)
                .into_iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect();

        // Stable sort keeps entry order for same-day transactions
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        transactions
    }
}
