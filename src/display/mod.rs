//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; the CLI decides where it goes.

pub mod account;
pub mod category;
pub mod series;
pub mod transaction;

pub use account::format_account_list;
pub use category::format_category_list;
pub use series::{format_balance_series, format_cash_flow_series};
pub use transaction::format_transaction_list;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// The parts of [`Settings`] that affect how values are printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format with the configured pattern, or ISO dates when the pattern
    /// cannot render a calendar date (`%H`, a stray `%`)
    pub fn date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(FALLBACK_DATE_FORMAT).to_string())
    }
}

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// `None` when `pattern` has specifiers a `NaiveDate` cannot render
pub(crate) fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

/// Shorten `s` to at most `max` characters, ending in `…` when cut
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
