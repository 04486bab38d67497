//! Core data models for pocket-budget
//!
//! Three independent collections make up the whole state: categories,
//! accounts and transactions. Transactions reference the other two by ID.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use ids::{AccountId, CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{Recurrence, RecurrencePeriod, Transaction, TransactionType};
