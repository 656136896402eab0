//! Item CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_item_details, format_item_list};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::CategoryType;
use crate::storage::DataStore;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// List items, newest first
    List {
        /// Only items in income or outcome categories
        #[arg(short, long, value_enum)]
        kind: Option<CategoryType>,
        /// Only items in this category (name, case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Number of items to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one item
    Show {
        /// Item ID or unique ID prefix
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(
    store: &DataStore,
    settings: &Settings,
    cmd: ItemCommands,
) -> PocketbookResult<()> {
    let categories = store.categories.get_all()?;

    match cmd {
        ItemCommands::List {
            kind,
            category,
            limit,
        } => {
            let mut items = match &category {
                Some(name) => {
                    let category = store
                        .categories
                        .get_by_name(name)?
                        .ok_or_else(|| PocketbookError::category_not_found(name.clone()))?;
                    store.items.get_by_category(category.id)?
                }
                None => store.items.get_all()?,
            };

            if let Some(kind) = kind {
                items.retain(|item| {
                    categories
                        .iter()
                        .any(|c| c.id == item.cid && c.kind == kind)
                });
            }
            if let Some(limit) = limit {
                items.truncate(limit);
            }

            println!("{}", format_item_list(&items, &categories, settings));
        }

        ItemCommands::Show { item } => {
            let found = store
                .items
                .find(&item)?
                .ok_or_else(|| PocketbookError::item_not_found(item.clone()))?;
            print!("{}", format_item_details(&found, &categories, settings));
        }
    }

    Ok(())
}
