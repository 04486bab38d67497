//! Transfer CLI command

use clap::Args;

use crate::error::BudgetResult;
use crate::services::TransferService;
use crate::storage::Store;

use super::{parse_money, resolve_account, CommandContext};

/// Move money between two accounts
#[derive(Debug, Args)]
pub struct TransferArgs {
    /// Account to debit (name or ID)
    pub from: String,
    /// Account to credit (name or ID)
    pub to: String,
    /// Amount to move
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle the transfer command.
///
/// Both accounts must exist. The amount is passed through as given: zero,
/// negative and overdrawing transfers are accepted.
pub fn handle_transfer_command(
    store: &mut Store,
    ctx: &CommandContext,
    args: TransferArgs,
) -> BudgetResult<()> {
    let amount = parse_money(&args.amount)?;
    let from = resolve_account(store.get(), &args.from)?;
    let to = resolve_account(store.get(), &args.to)?;

    TransferService::new(store).transfer(from, to, amount);

    let display = ctx.display();
    let state = store.get();
    println!("Transferred {}", display.money(amount));
    let mut touched = vec![from];
    if to != from {
        touched.push(to);
    }
    for account in touched.into_iter().filter_map(|id| state.account(id)) {
        println!("  {}: {}", account.name, display.money(account.balance));
    }
    Ok(())
}
