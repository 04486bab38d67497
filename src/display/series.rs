//! Text charts for report series
//!
//! Each point is one line: date, amount, and a bar scaled to the largest
//! absolute value in the series. Negative values draw to the left of the
//! axis.

use chrono::NaiveDate;

use crate::models::Money;
use crate::reports::{BalancePoint, CashFlowPoint, CashFlowTotals};

use super::DisplayOptions;

const BAR_WIDTH: usize = 24;

fn bar(value: Money, max_abs: u64) -> String {
    let len = if max_abs == 0 {
        0
    } else {
        let scaled = value.cents().unsigned_abs() as f64 / max_abs as f64 * BAR_WIDTH as f64;
        scaled.round() as usize
    };

    if value.is_negative() {
        format!("{:>BAR_WIDTH$}|", "█".repeat(len))
    } else {
        format!("{:>BAR_WIDTH$}|{}", "", "█".repeat(len))
    }
}

fn chart(
    points: impl Iterator<Item = (NaiveDate, Money)> + Clone,
    options: &DisplayOptions,
) -> String {
    let max_abs = points
        .clone()
        .map(|(_, v)| v.cents().unsigned_abs())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (date, value) in points {
        output.push_str(&format!(
            "{:<10}  {:>14}  {}\n",
            options.date(date),
            options.money(value),
            bar(value, max_abs).trim_end(),
        ));
    }
    output
}

/// Cash-flow chart with inflow, outflow and net totals
pub fn format_cash_flow_series(points: &[CashFlowPoint], options: &DisplayOptions) -> String {
    if points.is_empty() {
        return "No data for this period.".to_string();
    }

    let totals = CashFlowTotals::of(points);
    let mut output = chart(points.iter().map(|p| (p.date, p.amount)), options);
    output.push_str(&format!(
        "\nIn {}  Out {}  Net {}",
        options.money(totals.inflow),
        options.money(totals.outflow),
        options.money(totals.net),
    ));
    output
}

/// Daily balance chart with the opening and closing figures
pub fn format_balance_series(points: &[BalancePoint], options: &DisplayOptions) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return "No data for this period.".to_string();
    };

    let mut output = chart(points.iter().map(|p| (p.date, p.balance)), options);
    output.push_str(&format!(
        "\nOpening {}  Closing {}  Change {}",
        options.money(first.balance),
        options.money(last.balance),
        options.money(last.balance - first.balance),
    ));
    output
}
