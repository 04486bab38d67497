//! Category display formatting

use crate::models::Category;

/// One line per category: icon, name and short ID
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nCreate one with 'pocket category add <name>'.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4);

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!(
            "{}  {:<name_width$}  {}\n",
            category.icon, category.name, category.id
        ));
    }
    output
}
