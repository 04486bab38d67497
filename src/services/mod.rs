//! Service layer for pocket-budget
//!
//! Services wrap the [`Store`](crate::storage::Store): each mutation builds the
//! next state and commits it in one step.

pub mod account;
pub mod category;
pub mod filter;
pub mod transaction;
pub mod transfer;

pub use account::{AccountService, AccountSummary};
pub use category::CategoryService;
pub use filter::{filter_by_period, TransactionFilter};
pub use transaction::{NewTransaction, TransactionService};
pub use transfer::{TransferOutcome, TransferService};
