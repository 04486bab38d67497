//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::paths::DEFAULT_EXPORT_FILE;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_accounts_csv, export_json_file, export_transactions_csv};
use crate::storage::Store;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full data as a versioned JSON document (can be imported back)
    Json,
    /// Transactions as CSV
    Csv,
    /// Accounts as CSV
    AccountsCsv,
}

impl ExportFormat {
    fn default_file(self) -> &'static str {
        match self {
            Self::Json => DEFAULT_EXPORT_FILE,
            Self::Csv => "transactions.csv",
            Self::AccountsCsv => "accounts.csv",
        }
    }
}

/// Write the budget data to a file
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (defaults to budget_data.json, or a .csv name for CSV)
    pub path: Option<PathBuf>,
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command(store: &Store, args: ExportArgs) -> BudgetResult<()> {
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(args.format.default_file()));
    let state = store.get();

    match args.format {
        ExportFormat::Json => export_json_file(state, &path)?,
        ExportFormat::Csv | ExportFormat::AccountsCsv => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            if args.format == ExportFormat::Csv {
                export_transactions_csv(state, &mut writer)?;
            } else {
                export_accounts_csv(state, &mut writer)?;
            }
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
        }
    }

    println!("Exported to {}", path.display());
    println!(
        "  {} categories, {} accounts, {} transactions",
        state.categories.len(),
        state.accounts.len(),
        state.transactions.len()
    );
    Ok(())
}
