//! Transaction CLI commands

use clap::Subcommand;

use crate::display::format_transaction_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Recurrence, RecurrencePeriod};
use crate::services::{NewTransaction, TransactionService};
use crate::storage::Store;

use super::{
    parse_date, parse_kind, parse_money, resolve_account, resolve_category, CommandContext,
    FilterArgs, PeriodArgs,
};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Account name or ID
        account: String,
        /// Positive amount (e.g., "12.50"); the type decides the sign
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
        /// Day of month the transaction repeats on (1-28)
        #[arg(long, requires = "repeat_period", value_parser = clap::value_parser!(u8).range(1..=28))]
        repeat_day: Option<u8>,
        /// daily, weekly, monthly or yearly
        #[arg(long, requires = "repeat_day")]
        repeat_period: Option<String>,
    },
    /// List transactions, newest first
    List {
        #[command(flatten)]
        period: PeriodArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Show at most this many transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut Store,
    ctx: &CommandContext,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let display = ctx.display();

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            category,
            kind,
            date,
            description,
            repeat_day,
            repeat_period,
        } => {
            let amount = parse_money(&amount)?;
            if !amount.is_positive() {
                return Err(BudgetError::Validation(format!(
                    "Amount must be greater than zero, got {}",
                    display.money(amount)
                )));
            }

            let recurrence = match (repeat_day, repeat_period) {
                (Some(day), Some(period)) => {
                    let period = RecurrencePeriod::parse(&period).ok_or_else(|| {
                        BudgetError::Validation(format!(
                            "Invalid repeat period: '{}'. Valid periods: daily, weekly, monthly, yearly",
                            period
                        ))
                    })?;
                    Some(Recurrence::new(day, period))
                }
                _ => None,
            };

            let state = store.get();
            let input = NewTransaction {
                kind: parse_kind(&kind)?,
                amount: Some(amount),
                category_id: Some(resolve_category(state, &category)?),
                account_id: Some(resolve_account(state, &account)?),
                description,
                date: Some(date.as_deref().map(parse_date).transpose()?.unwrap_or(ctx.today)),
                recurrence,
            };

            let txn = TransactionService::new(store)
                .add(input)
                .ok_or_else(|| BudgetError::Validation("Transaction was not recorded".into()))?;

            let state = store.get();
            println!(
                "Recorded {} of {} on {}",
                txn.kind.to_string().to_lowercase(),
                display.money(txn.amount),
                display.date(txn.date)
            );
            println!("  Account: {}", state.account_name(txn.account_id));
            println!("  Category: {}", state.category_label(txn.category_id));
            if let Some(account) = state.account(txn.account_id) {
                println!("  New balance: {}", display.money(account.balance));
            }
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            period,
            filter,
            limit,
        } => {
            let period = period.resolve(&ctx.settings)?;
            let filter = filter.resolve(store.get())?;
            let transactions =
                TransactionService::new(store).list(&period, &filter, ctx.today, limit);

            println!("Transactions ({})", period);
            println!();
            println!(
                "{}",
                format_transaction_list(&transactions, store.get(), &display)
            );
        }
    }

    Ok(())
}
