//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Names given on the
//! command line are resolved to IDs here; the services below never see raw
//! user text except descriptions.

pub mod account;
pub mod category;
pub mod export;
pub mod import;
pub mod report;
pub mod transaction;
pub mod transfer;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use transfer::{handle_transfer_command, TransferArgs};

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{AccountId, CategoryId, Money, TransactionType};
use crate::reports::Period;
use crate::services::TransactionFilter;
use crate::storage::BudgetState;

/// What every handler needs besides the store
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    /// Local calendar date the command runs on
    pub today: NaiveDate,
}

impl CommandContext {
    pub fn new(settings: Settings, today: NaiveDate) -> Self {
        Self { settings, today }
    }

    pub fn display(&self) -> crate::display::DisplayOptions {
        crate::display::DisplayOptions::from(&self.settings)
    }
}

/// `--period`, `--from` and `--to`, shared by listing and reports
#[derive(Debug, Clone, Default, Args)]
pub struct PeriodArgs {
    /// all, monthly, yearly or custom (defaults to the configured period)
    #[arg(short, long)]
    pub period: Option<String>,
    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl PeriodArgs {
    pub fn resolve(&self, settings: &Settings) -> BudgetResult<Period> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;

        if self.period.is_none() && from.is_none() && to.is_none() {
            return Ok(settings.default_period);
        }

        Period::parse(self.period.as_deref(), from, to).ok_or_else(|| {
            BudgetError::Validation(format!(
                "Invalid period: '{}'. Valid periods: all, monthly, yearly, custom",
                self.period.as_deref().unwrap_or_default()
            ))
        })
    }
}

/// Field filters shared by listing and the cash-flow report
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only transactions whose description contains this text (case-sensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only this category (name or ID)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only this account (name or ID)
    #[arg(short, long)]
    pub account: Option<String>,
    /// Only income or only expense
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

impl FilterArgs {
    pub fn resolve(&self, state: &BudgetState) -> BudgetResult<TransactionFilter> {
        let mut filter = TransactionFilter::new();
        if let Some(search) = &self.search {
            filter = filter.description(search.clone());
        }
        if let Some(category) = &self.category {
            filter = filter.category(resolve_category(state, category)?);
        }
        if let Some(account) = &self.account {
            filter = filter.account(resolve_account(state, account)?);
        }
        if let Some(kind) = &self.kind {
            filter = filter.kind(parse_kind(kind)?);
        }
        Ok(filter)
    }
}

pub(crate) fn parse_money(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50' or '$12.50'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_date(input: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_kind(input: &str) -> BudgetResult<TransactionType> {
    TransactionType::parse(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid transaction type: '{}'. Valid types: income, expense",
            input
        ))
    })
}

pub(crate) fn resolve_account(state: &BudgetState, identifier: &str) -> BudgetResult<AccountId> {
    state
        .find_account(identifier)
        .map(|a| a.id)
        .ok_or_else(|| BudgetError::account_not_found(identifier))
}

pub(crate) fn resolve_category(state: &BudgetState, identifier: &str) -> BudgetResult<CategoryId> {
    state
        .find_category(identifier)
        .map(|c| c.id)
        .ok_or_else(|| BudgetError::category_not_found(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Category};

    #[test]
    fn test_period_args() {
        let settings = Settings::default();
        assert_eq!(PeriodArgs::default().resolve(&settings).unwrap(), Period::Monthly);

        let args = PeriodArgs {
            period: None,
            from: Some("2025-01-01".into()),
            to: Some("2025-01-31".into()),
        };
        assert_eq!(
            args.resolve(&settings).unwrap(),
            Period::custom(NaiveDate::from_ymd_opt(2025, 1, 1), NaiveDate::from_ymd_opt(2025, 1, 31))
        );

        let bad = PeriodArgs {
            period: Some("weekly".into()),
            ..PeriodArgs::default()
        };
        assert!(bad.resolve(&settings).unwrap_err().is_validation());

        let bad_date = PeriodArgs {
            from: Some("01/02/2025".into()),
            ..PeriodArgs::default()
        };
        assert!(bad_date.resolve(&settings).is_err());
    }

    #[test]
    fn test_filter_args_resolve_names() {
        let account = Account::new("Checking");
        let category = Category::new("Food", "🍔");
        let state = BudgetState {
            categories: vec![category],
            accounts: vec![account],
            transactions: vec![],
        };

        let args = FilterArgs {
            account: Some("checking".into()),
            category: Some("FOOD".into()),
            kind: Some("expense".into()),
            search: Some("Lunch".into()),
        };
        assert!(args.resolve(&state).is_ok());

        let missing = FilterArgs {
            account: Some("Savings".into()),
            ..FilterArgs::default()
        };
        assert!(missing.resolve(&state).unwrap_err().is_not_found());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_money("$12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_money("twelve").unwrap_err().is_validation());
        assert!(parse_money("90000000000000000").unwrap_err().is_validation());
        assert!(parse_kind("transfer").is_err());
        assert_eq!(parse_kind("Income").unwrap(), TransactionType::Income);
    }
}
