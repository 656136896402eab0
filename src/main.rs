use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use pocketbook::cli::{
    handle_category_command, handle_item_command, handle_log_command, CategoryCommands,
    ItemCommands,
};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::logging::init_tracing;
use pocketbook::storage::{DataStore, SeedData};
use pocketbook::tui::{run_tui, Route};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Terminal bookkeeping for income and outcome line items",
    long_about = "Pocketbook keeps a list of income and outcome items, each filed \
                  under a category. Browse and edit them in the TUI, or list them \
                  from the command line."
)]
struct Cli {
    /// Seed file (.json, .yaml or .yml) to load instead of the configured one
    #[arg(long, global = true, env = "POCKETBOOK_SEED")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Route to open: /, /create or /edit/<item id>
        #[arg(long, default_value = "/")]
        route: Route,
    },

    /// Item commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings and a demo seed file
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn load_store(seed: Option<&Path>, settings: &Settings, paths: &PocketbookPaths) -> Result<DataStore> {
    let (data, source) = SeedData::resolve(seed, settings, paths)?;
    info!(%source, categories = data.categories.len(), items = data.items.len(), "loading seed");
    Ok(DataStore::seeded(data)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&paths, &settings)?;

    let seed = cli.seed.as_deref();

    match cli.command {
        Some(Commands::Tui { route }) => {
            let store = Arc::new(load_store(seed, &settings, &paths)?);
            run_tui(store, &settings, &paths, route)?;
        }
        Some(Commands::Item(cmd)) => {
            let store = load_store(seed, &settings, &paths)?;
            handle_item_command(&store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let store = load_store(seed, &settings, &paths)?;
            handle_category_command(&store, cmd)?;
        }
        Some(Commands::Log { limit }) => {
            handle_log_command(&paths, limit)?;
        }
        Some(Commands::Init { force }) => {
            if paths.is_initialized() && !force {
                println!(
                    "Pocketbook is already initialized at {}",
                    paths.base_dir().display()
                );
                println!("Run 'pocketbook init --force' to overwrite.");
                return Ok(());
            }

            println!("Initializing Pocketbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let seed_file = paths.seed_file();
            if force || !seed_file.exists() {
                SeedData::demo().save(&seed_file)?;
                println!("Wrote demo seed: {}", seed_file.display());
            }
            info!(force, "initialized data directory");
            println!("Initialization complete!");
            println!();
            println!("Edit the seed file to change the categories and items loaded at startup.");
        }
        Some(Commands::Config) => {
            let (_, source) = SeedData::resolve(seed, &settings, &paths)?;
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Seed:           {}", source);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Demo data:       {}", settings.seed_demo_data);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Pocketbook - income and outcome bookkeeping");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
