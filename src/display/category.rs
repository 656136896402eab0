//! Category display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

/// Format categories as a table, in the order given
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.to_string(),
        name: c.name.clone(),
        kind: c.kind.label().to_string(),
        icon: c.icon.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    #[test]
    fn test_category_table() {
        let categories = vec![
            Category::new("Salary", CategoryType::Income).with_icon("briefcase"),
            Category::new("Food", CategoryType::Outcome),
        ];
        let output = format_category_list(&categories);
        assert!(output.contains("Salary"));
        assert!(output.contains("Income"));
        assert!(output.contains("briefcase"));
        assert!(output.find("Salary").unwrap() < output.find("Food").unwrap());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }
}
