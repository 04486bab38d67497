//! pocket-budget - local personal budgeting
//!
//! Track accounts, categories and income/expense transactions, move money
//! between accounts, and chart cash flow and balances over time. Everything
//! is kept in JSON files on the local machine.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: the crate's error type
//! - `models`: categories, accounts, transactions, money and IDs
//! - `storage`: the in-memory state and its persistence
//! - `services`: mutations and list queries over the store
//! - `reports`: periods, date windows and the chart series
//! - `export`: JSON export/import and CSV export
//! - `display` / `cli`: terminal output and the command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_budget::config::BudgetPaths;
//! use pocket_budget::storage::Store;
//!
//! let paths = BudgetPaths::new()?;
//! let mut store = Store::open_at(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
