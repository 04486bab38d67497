//! Account CLI commands

use clap::Subcommand;

use crate::display::format_account_list;
use crate::error::{BudgetError, BudgetResult};
use crate::services::AccountService;
use crate::storage::Store;

use super::{parse_money, CommandContext};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Add {
        /// Account name
        name: String,
        /// Starting balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with their balances
    List,
}

/// Handle an account command
pub fn handle_account_command(
    store: &mut Store,
    ctx: &CommandContext,
    cmd: AccountCommands,
) -> BudgetResult<()> {
    let mut service = AccountService::new(store);
    let display = ctx.display();

    match cmd {
        AccountCommands::Add { name, balance } => {
            let starting_balance = parse_money(&balance)?;
            let account = service.create(&name, starting_balance).ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Invalid account name: '{}'. Names must be 1 to 100 characters",
                    name
                ))
            })?;

            println!("Created account: {}", account.name);
            println!("  Starting Balance: {}", display.money(account.starting_balance));
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let output = format_account_list(&service.list_with_balances(), &display);
            println!("{}", output.trim_end());
        }
    }

    Ok(())
}
