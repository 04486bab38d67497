//! Import CLI command

use std::path::PathBuf;

use clap::Args;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{import_json, parse_import, Rejection};
use crate::storage::Store;

/// Replace all data with the contents of an export file
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Export file to read
    pub path: PathBuf,
    /// Check the file and report what would be imported without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

fn print_rejections(rejected: &[Rejection]) {
    if rejected.is_empty() {
        return;
    }
    println!();
    println!("Skipped {} invalid entries:", rejected.len());
    for r in rejected {
        println!("  {}[{}]: {}", r.collection, r.index, r.reason);
    }
}

/// Handle the import command
pub fn handle_import_command(store: &mut Store, args: ImportArgs) -> BudgetResult<()> {
    let json = std::fs::read_to_string(&args.path).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", args.path.display(), e))
    })?;

    if args.dry_run {
        let outcome = parse_import(&json)?;
        println!("Dry run: {} is readable", args.path.display());
        println!(
            "  Would import {} categories, {} accounts, {} transactions",
            outcome.state.categories.len(),
            outcome.state.accounts.len(),
            outcome.state.transactions.len()
        );
        print_rejections(&outcome.rejected);
        return Ok(());
    }

    let summary = import_json(store, &json)?;
    println!("Imported from {}", args.path.display());
    println!(
        "  {} categories, {} accounts, {} transactions",
        summary.categories, summary.accounts, summary.transactions
    );
    print_rejections(&summary.rejected);
    Ok(())
}
