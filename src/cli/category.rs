//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::PocketbookResult;
use crate::models::CategoryType;
use crate::storage::DataStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories in display order
    List {
        /// Only income or outcome categories
        #[arg(short, long, value_enum)]
        kind: Option<CategoryType>,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &DataStore, cmd: CategoryCommands) -> PocketbookResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind) => store.categories.get_by_type(kind)?,
                None => store.categories.get_all()?,
            };
            println!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
