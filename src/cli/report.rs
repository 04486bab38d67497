//! Report CLI commands
//!
//! Both reports print a text chart by default, or the raw series as JSON
//! with `--json`.

use clap::Subcommand;
use serde::Serialize;

use crate::display::{format_balance_series, format_cash_flow_series};
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{build_balance_series, build_cash_flow_series, StepSize};
use crate::storage::Store;

use super::{resolve_account, CommandContext, FilterArgs, PeriodArgs};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Net income minus expenses per day, week or month
    CashFlow {
        #[command(flatten)]
        period: PeriodArgs,
        /// day, week or month (defaults to the configured step)
        #[arg(long)]
        step: Option<String>,
        #[command(flatten)]
        filter: FilterArgs,
        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },
    /// Daily balance of one account or all of them
    Balance {
        #[command(flatten)]
        period: PeriodArgs,
        /// Only this account (name or ID)
        #[arg(short, long)]
        account: Option<String>,
        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> BudgetResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle a report command
pub fn handle_report_command(
    store: &Store,
    ctx: &CommandContext,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let state = store.get();
    let display = ctx.display();

    match cmd {
        ReportCommands::CashFlow {
            period,
            step,
            filter,
            json,
        } => {
            let period = period.resolve(&ctx.settings)?;
            let step = match step {
                Some(step) => StepSize::parse(&step).ok_or_else(|| {
                    BudgetError::Validation(format!(
                        "Invalid step: '{}'. Valid steps: day, week, month",
                        step
                    ))
                })?,
                None => ctx.settings.default_step,
            };
            let filter = filter.resolve(state)?;

            let series =
                build_cash_flow_series(&state.transactions, &period, step, &filter, ctx.today);

            if json {
                return print_json(&series);
            }
            println!("Cash flow by {} ({})", step, period);
            println!();
            println!("{}", format_cash_flow_series(&series, &display));
        }

        ReportCommands::Balance {
            period,
            account,
            json,
        } => {
            let period = period.resolve(&ctx.settings)?;
            let selected = account
                .as_deref()
                .map(|a| resolve_account(state, a))
                .transpose()?;

            let series = build_balance_series(
                &state.transactions,
                &state.accounts,
                &period,
                selected,
                ctx.today,
            );

            if json {
                return print_json(&series);
            }
            let scope = selected.map_or("all accounts", |id| state.account_name(id));
            println!("Balance of {} ({})", scope, period);
            println!();
            println!("{}", format_balance_series(&series, &display));
        }
    }

    Ok(())
}
