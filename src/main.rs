use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pocket_budget::cli::{
    handle_account_command, handle_category_command, handle_export_command,
    handle_import_command, handle_report_command, handle_transaction_command,
    handle_transfer_command, CommandContext,
};
use pocket_budget::config::{BudgetPaths, Settings};
use pocket_budget::storage::Store;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Local personal budgeting from the command line",
    long_about = "pocket keeps accounts, categories and transactions in local JSON \
                  files and charts cash flow and balances over time."
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding settings and data
    #[arg(long, global = true, env = "POCKET_BUDGET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(pocket_budget::cli::CategoryCommands),

    /// Account management commands
    #[command(subcommand)]
    Account(pocket_budget::cli::AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(pocket_budget::cli::TransactionCommands),

    /// Move money between two accounts
    Transfer(pocket_budget::cli::TransferArgs),

    /// Cash-flow and balance charts
    #[command(subcommand)]
    Report(pocket_budget::cli::ReportCommands),

    /// Export data to a file
    Export(pocket_budget::cli::ExportArgs),

    /// Replace all data with an export file
    Import(pocket_budget::cli::ImportArgs),

    /// Create the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let Some(command) = cli.command else {
        println!("pocket - local personal budgeting");
        println!();
        println!("Run 'pocket --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            paths.ensure_directories()?;
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized pocket at: {}", paths.base_dir().display());
                println!();
                println!("Next: 'pocket account add <name>' and 'pocket category add <name>'.");
            }
            return Ok(());
        }
        Commands::Config => {
            println!("pocket Configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default period:  {}", settings.default_period);
            println!("  Default step:    {}", settings.default_step);
            return Ok(());
        }
        _ => {}
    }

    let mut store = Store::open_at(&paths)?;
    let ctx = CommandContext::new(settings, chrono::Local::now().date_naive());

    match command {
        Commands::Category(cmd) => handle_category_command(&mut store, cmd)?,
        Commands::Account(cmd) => handle_account_command(&mut store, &ctx, cmd)?,
        Commands::Transaction(cmd) => handle_transaction_command(&mut store, &ctx, cmd)?,
        Commands::Transfer(args) => handle_transfer_command(&mut store, &ctx, args)?,
        Commands::Report(cmd) => handle_report_command(&store, &ctx, cmd)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Import(args) => handle_import_command(&mut store, args)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
