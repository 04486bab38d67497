//! Cash-flow series
//!
//! Walks the report window in steps and, for each step anchor, sums the signed
//! amounts of the matching transactions that fall in the anchor's bucket.
//!
//! Buckets are computed independently per anchor and are not clipped to the
//! window. With weekly steps the first and last buckets cover the whole
//! Sunday-start week around their anchor, so they can include transactions
//! dated just outside the window.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Money, Transaction};
use crate::services::TransactionFilter;

use super::window::{sunday_week, Period, StepSize};

/// One bar of the cash-flow chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashFlowPoint {
    /// Step anchor
    pub date: NaiveDate,
    /// Income minus expenses in the anchor's bucket
    pub amount: Money,
}

/// Whether `date` falls in the bucket anchored at `anchor`
fn in_bucket(anchor: NaiveDate, step: StepSize, date: NaiveDate) -> bool {
    match step {
        StepSize::Day => date == anchor,
        StepSize::Week => {
            let (first, last) = sunday_week(anchor);
            first <= date && date <= last
        }
        StepSize::Month => date.year() == anchor.year() && date.month() == anchor.month(),
    }
}

/// Build the cash-flow series for `period`, bucketed by `step`.
///
/// Only transactions passing `filter` are counted. For [`Period::All`] the
/// window spans the matching transactions. An unresolvable window (custom
/// period missing a bound, or nothing to span) gives an empty series.
pub fn build_cash_flow_series(
    transactions: &[Transaction],
    period: &Period,
    step: StepSize,
    filter: &TransactionFilter,
    today: NaiveDate,
) -> Vec<CashFlowPoint> {
    let matching: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    let Some(window) = period.resolve_window(today, &matching) else {
        return Vec::new();
    };

    window
        .anchors(step)
        .into_iter()
        .map(|anchor| CashFlowPoint {
            date: anchor,
            amount: matching
                .iter()
                .filter(|t| in_bucket(anchor, step, t.date))
                .map(Transaction::signed_amount)
                .sum(),
        })
        .collect()
}

/// Totals over a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CashFlowTotals {
    /// Sum of positive buckets
    pub inflow: Money,
    /// Sum of negative buckets (a negative number)
    pub outflow: Money,
    pub net: Money,
}

impl CashFlowTotals {
    pub fn of(points: &[CashFlowPoint]) -> Self {
        let mut totals = Self::default();
        for point in points {
            if point.amount.is_negative() {
                totals.outflow += point.amount;
            } else {
                totals.inflow += point.amount;
            }
            totals.net += point.amount;
        }
        totals
    }
}
