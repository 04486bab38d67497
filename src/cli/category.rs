//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{BudgetError, BudgetResult};
use crate::services::CategoryService;
use crate::storage::Store;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Icon shown next to the name (usually one emoji)
        #[arg(short, long, default_value = "")]
        icon: String,
    },
    /// List all categories
    List,
}

/// Handle a category command
pub fn handle_category_command(store: &mut Store, cmd: CategoryCommands) -> BudgetResult<()> {
    let mut service = CategoryService::new(store);

    match cmd {
        CategoryCommands::Add { name, icon } => {
            let category = service.create(&name, &icon).ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Invalid category name: '{}'. Names must be 1 to 50 characters",
                    name
                ))
            })?;
            println!("Created category: {}", category);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            println!("{}", format_category_list(&service.list()).trim_end());
        }
    }

    Ok(())
}
