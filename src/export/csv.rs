//! CSV export
//!
//! Spreadsheet-friendly dumps of the transaction list and the accounts.
//! References that no longer resolve are written as "Unknown".

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, TransactionType};
use crate::storage::BudgetState;

#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    id: String,
    date: String,
    #[serde(rename = "type")]
    kind: TransactionType,
    account: &'a str,
    category: &'a str,
    description: &'a str,
    amount: String,
    recurrence: String,
}

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    id: String,
    name: &'a str,
    starting_balance: String,
    balance: String,
}

/// Signed decimal without a currency symbol
fn plain(amount: Money) -> String {
    amount.format_with_symbol("")
}

fn export_err(e: impl std::fmt::Display) -> BudgetError {
    BudgetError::Export(e.to_string())
}

/// Write every transaction as one CSV row, oldest first. Amounts are signed.
pub fn export_transactions_csv<W: Write>(state: &BudgetState, writer: W) -> BudgetResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut transactions: Vec<_> = state.transactions.iter().collect();
    transactions.sort_by_key(|t| t.date);

    for txn in transactions {
        out.serialize(TransactionRow {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.to_string(),
            kind: txn.kind,
            account: state.account_name(txn.account_id),
            category: state.category_name(txn.category_id),
            description: &txn.description,
            amount: plain(txn.signed_amount()),
            recurrence: txn.recurrence.map(|r| r.to_string()).unwrap_or_default(),
        })
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}

/// Write every account with its baseline and current balance
pub fn export_accounts_csv<W: Write>(state: &BudgetState, writer: W) -> BudgetResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    for account in &state.accounts {
        out.serialize(AccountRow {
            id: account.id.as_uuid().to_string(),
            name: &account.name,
            starting_balance: plain(account.starting_balance),
            balance: plain(account.balance),
        })
        .map_err(export_err)?;
    }
    out.flush().map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountId, Category, Transaction};
    use chrono::NaiveDate;

    fn state_with_dangling() -> BudgetState {
        let category = Category::new("Food, drink", "🍔");
        let account = Account::with_starting_balance("Cash", Money::from_units(20));
        let mut known = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(450),
            category.id,
            account.id,
            NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
        );
        known.description = "Lunch".into();
        let orphan = Transaction::new(
            TransactionType::Income,
            Money::from_units(3),
            crate::models::CategoryId::new(),
            AccountId::new(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );

        BudgetState {
            categories: vec![category],
            accounts: vec![account],
            transactions: vec![known, orphan],
        }
    }

    #[test]
    fn test_transactions_csv() {
        let mut buffer = Vec::new();
        export_transactions_csv(&state_with_dangling(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "id,date,type,account,category,description,amount,recurrence"
        );
        assert!(lines[1].contains("2025-01-01,income,Unknown,Unknown,,3.00,"));
        assert!(lines[2].contains("2025-02-02,expense,Cash,\"Food, drink\",Lunch,-4.50,"));
    }

    #[test]
    fn test_accounts_csv() {
        let mut buffer = Vec::new();
        export_accounts_csv(&state_with_dangling(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("id,name,starting_balance,balance\n"));
        assert!(text.contains(",Cash,20.00,20.00"));
    }
}
