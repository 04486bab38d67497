//! Balance-over-time series
//!
//! One point per day of the report window. Each point is the baseline balance
//! of the selected accounts plus every one of their transactions dated on or
//! before that day, including transactions from before the window opens.
//! Transfers are not transactions and do not show up here.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Account, AccountId, Money, Transaction};

use super::window::Period;

/// A day's closing balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Money,
}

/// Build the daily balance series over `period`.
///
/// With `selected` set only that account counts; an ID that matches no
/// account gives a flat zero line. For [`Period::All`] the window spans every
/// transaction on record.
pub fn build_balance_series(
    transactions: &[Transaction],
    accounts: &[Account],
    period: &Period,
    selected: Option<AccountId>,
    today: NaiveDate,
) -> Vec<BalancePoint> {
    let Some(window) = period.resolve_window(today, transactions) else {
        return Vec::new();
    };

    let included: HashSet<AccountId> = accounts
        .iter()
        .map(|a| a.id)
        .filter(|id| selected.map_or(true, |s| s == *id))
        .collect();

    let baseline: Money = accounts
        .iter()
        .filter(|a| included.contains(&a.id))
        .map(|a| a.starting_balance)
        .sum();

    let mut relevant: Vec<(NaiveDate, Money)> = transactions
        .iter()
        .filter(|t| included.contains(&t.account_id))
        .map(|t| (t.date, t.signed_amount()))
        .collect();
    relevant.sort_by_key(|(date, _)| *date);

    // Sweep the sorted transactions once while walking the days
    let mut pending = relevant.into_iter().peekable();
    let mut running = baseline;
    window
        .days()
        .map(|day| {
            while let Some((_, amount)) = pending.next_if(|(date, _)| *date <= day) {
                running += amount;
            }
            BalancePoint {
                date: day,
                balance: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionType, units: i64, account: AccountId, d: NaiveDate) -> Transaction {
        Transaction::new(kind, Money::from_units(units), CategoryId::new(), account, d)
    }

    #[test]
    fn test_balance_steps_with_transactions() {
        let account = Account::with_starting_balance("Checking", Money::from_units(100));
        let ts = vec![
            txn(TransactionType::Income, 50, account.id, date(2025, 3, 5)),
            txn(TransactionType::Expense, 20, account.id, date(2025, 3, 10)),
        ];
        let series = build_balance_series(
            &ts,
            &[account],
            &Period::Monthly,
            None,
            date(2025, 3, 15),
        );

        assert_eq!(series.len(), 31);
        let at = |d: u32| series[d as usize - 1].balance;
        assert_eq!(at(1), Money::from_units(100));
        assert_eq!(at(4), Money::from_units(100));
        assert_eq!(at(5), Money::from_units(150));
        assert_eq!(at(9), Money::from_units(150));
        assert_eq!(at(10), Money::from_units(130));
        assert_eq!(at(31), Money::from_units(130));
    }

    #[test]
    fn test_earlier_transactions_carry_in() {
        let account = Account::with_starting_balance("Checking", Money::from_units(10));
        let ts = vec![txn(TransactionType::Income, 5, account.id, date(2024, 12, 1))];
        let series = build_balance_series(
            &ts,
            &[account],
            &Period::custom(Some(date(2025, 1, 1)), Some(date(2025, 1, 3))),
            None,
            date(2025, 1, 1),
        );
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.balance == Money::from_units(15)));
    }

    #[test]
    fn test_selected_account_only() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        let b = Account::with_starting_balance("B", Money::from_units(1000));
        let ts = vec![
            txn(TransactionType::Expense, 1, a.id, date(2025, 1, 1)),
            txn(TransactionType::Expense, 500, b.id, date(2025, 1, 1)),
        ];
        let window = Period::custom(Some(date(2025, 1, 1)), Some(date(2025, 1, 1)));

        let only_a = build_balance_series(&ts, &[a.clone(), b.clone()], &window, Some(a.id), date(2025, 1, 1));
        assert_eq!(only_a[0].balance, Money::from_units(99));

        let both = build_balance_series(&ts, &[a, b], &window, None, date(2025, 1, 1));
        assert_eq!(both[0].balance, Money::from_units(599));
    }

    #[test]
    fn test_unknown_selection_is_flat_zero() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        let series = build_balance_series(
            &[],
            &[a],
            &Period::Monthly,
            Some(AccountId::new()),
            date(2025, 2, 1),
        );
        assert_eq!(series.len(), 28);
        assert!(series.iter().all(|p| p.balance.is_zero()));
    }

    #[test]
    fn test_transfers_do_not_move_series() {
        let mut a = Account::with_starting_balance("A", Money::from_units(100));
        a.adjust(Money::from_units(-60));
        let series = build_balance_series(
            &[],
            &[a],
            &Period::custom(Some(date(2025, 1, 1)), Some(date(2025, 1, 2))),
            None,
            date(2025, 1, 1),
        );
        assert_eq!(series[1].balance, Money::from_units(100));
    }

    #[test]
    fn test_empty_window() {
        let a = Account::with_starting_balance("A", Money::from_units(100));
        assert!(build_balance_series(&[], &[a.clone()], &Period::All, None, date(2025, 1, 1)).is_empty());
        let backwards = Period::custom(Some(date(2025, 2, 1)), Some(date(2025, 1, 1)));
        assert!(build_balance_series(&[], &[a], &backwards, None, date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_dates_consecutive() {
        let series = build_balance_series(&[], &[], &Period::Yearly, None, date(2024, 6, 1));
        assert_eq!(series.len(), 366);
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }
}
