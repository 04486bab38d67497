//! Transaction display formatting
//!
//! The list view is a `tabled` table. Category and account references that
//! no longer resolve print as "Unknown".

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, Transaction};
use crate::storage::BudgetState;

use super::{truncate, DisplayOptions};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Repeats")]
    repeats: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, state: &BudgetState, options: &DisplayOptions) -> Self {
        Self {
            date: options.date(txn.date),
            description: truncate(&txn.description, 30),
            category: state.category_label(txn.category_id),
            account: state.account_name(txn.account_id).to_string(),
            amount: options.money(txn.signed_amount()),
            repeats: txn.recurrence.map(|r| r.to_string()).unwrap_or_default(),
            id: txn.id.to_string(),
        }
    }
}

/// Format transactions as a table followed by an income/expense summary
pub fn format_transaction_list(
    transactions: &[Transaction],
    state: &BudgetState,
    options: &DisplayOptions,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows: Vec<_> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, state, options))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: Money = transactions
        .iter()
        .filter(|t| !t.is_income())
        .map(|t| t.amount)
        .sum();

    format!(
        "{}\n\n{} transaction(s)  income {}  expenses {}  net {}",
        table,
        transactions.len(),
        options.money(income),
        options.money(expenses),
        options.money(income - expenses),
    )
}
