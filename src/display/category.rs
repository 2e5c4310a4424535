//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        kind: c.category_type.to_string(),
        color: c.color.clone(),
        icon: c.icon.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    #[test]
    fn test_category_table() {
        let categories = vec![
            Category::new("Salary", CategoryType::Income).with_style("#00ff00", "cash"),
            Category::new("Food", CategoryType::Expenses),
        ];
        let output = format_category_list(&categories);

        assert!(output.contains("Salary"));
        assert!(output.contains("#00ff00"));
        assert!(output.contains("Food"));
    }
}
