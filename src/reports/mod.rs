//! Reports module for pocket-budget
//!
//! Turns the transaction list into chart-ready series: net cash flow per
//! step and the daily balance of one or all accounts.

pub mod balance;
pub mod cash_flow;
pub mod window;

pub use balance::{build_balance_series, BalancePoint};
pub use cash_flow::{build_cash_flow_series, CashFlowPoint, CashFlowTotals};
pub use window::{DateWindow, Period, StepSize};
