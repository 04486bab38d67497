//! Transfer service
//!
//! A transfer moves money between two accounts' current balances. It does not
//! create transactions, so it never shows up in the cash-flow or balance
//! series.

use tracing::debug;

use crate::models::{AccountId, Money};
use crate::storage::Store;

/// Service for transfers between accounts
pub struct TransferService<'a> {
    store: &'a mut Store,
}

/// Which sides of a transfer found their account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub debited: bool,
    pub credited: bool,
}

impl TransferOutcome {
    pub fn is_complete(&self) -> bool {
        self.debited && self.credited
    }
}

impl<'a> TransferService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Debit `from` and credit `to` by `amount` in a single commit.
    ///
    /// Self-transfers, zero or negative amounts and overdrafts are all
    /// allowed. A side whose account does not exist is skipped.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Money) -> TransferOutcome {
        let (debited, credited) = self
            .store
            .update(|state| state.apply_transfer(from, to, amount));
        debug!(%from, %to, %amount, debited, credited, "transfer applied");
        TransferOutcome { debited, credited }
    }
}
