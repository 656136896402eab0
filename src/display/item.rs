//! Item display formatting
//!
//! Amounts are signed by category type: income positive, outcome negative.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::{Category, Item, Totals};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn category_of<'a>(categories: &'a [Category], item: &Item) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == item.cid)
}

fn signed_amount(item: &Item, category: Option<&Category>, settings: &Settings) -> String {
    let amount = match category {
        Some(c) => item.signed_amount(c.kind),
        None => item.amount,
    };
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format items as a table followed by totals
pub fn format_item_list(items: &[Item], categories: &[Category], settings: &Settings) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }

    let date_format = settings.display_date_format();
    let rows = items.iter().map(|item| {
        let category = category_of(categories, item);
        ItemRow {
            id: item.id.to_string(),
            date: item.date.format(date_format).to_string(),
            title: item.title.clone(),
            category: category
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            amount: signed_amount(item, category, settings),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let totals = Totals::of(items, categories);
    let symbol = &settings.currency_symbol;
    format!(
        "{}\nIncome: {}  Outcome: {}  Balance: {}",
        table,
        totals.income.format_with_symbol(symbol),
        totals.outcome.format_with_symbol(symbol),
        totals.balance().format_with_symbol(symbol),
    )
}

/// Format one item with its category
pub fn format_item_details(item: &Item, categories: &[Category], settings: &Settings) -> String {
    let category = category_of(categories, item);
    let category_line = match category {
        Some(c) => format!("{} ({})", c.name, c.kind),
        None => format!("Unknown ({})", item.cid),
    };

    let mut output = String::new();
    output.push_str(&format!("Item: {}\n", item.title));
    output.push_str(&format!("  ID:       {}\n", item.id.to_full_string()));
    output.push_str(&format!(
        "  Date:     {}\n",
        item.date.format(settings.display_date_format())
    ));
    output.push_str(&format!(
        "  Amount:   {}\n",
        signed_amount(item, category, settings)
    ));
    output.push_str(&format!("  Category: {}\n", category_line));
    output.push_str(&format!(
        "  Created:  {}\n",
        item.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "  Updated:  {}\n",
        item.updated_at.format("%Y-%m-%d %H:%M")
    ));
    output
}
