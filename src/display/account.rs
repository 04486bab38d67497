//! Account display formatting

use crate::models::Money;
use crate::services::AccountSummary;

use super::{truncate, DisplayOptions};

/// Format accounts as an aligned table with a total row
pub fn format_account_list(summaries: &[AccountSummary], options: &DisplayOptions) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n\nCreate one with 'pocket account add <name>'.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.chars().count().min(30))
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}  {:>6}  {}\n",
        "Name", "Starting", "Balance", "Txns", "ID",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}  {:->14}  {:->6}  {:-<12}\n",
        "", "", "", "", "",
    ));

    for summary in summaries {
        let account = &summary.account;
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>14}  {:>6}  {}\n",
            truncate(&account.name, 30),
            options.money(account.starting_balance),
            options.money(account.balance),
            summary.transaction_count,
            account.id,
        ));
    }

    let total: Money = summaries.iter().map(|s| s.account.balance).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}\n",
        "Total",
        "",
        options.money(total),
    ));
    output
}
