use std::path::PathBuf;

use clap::Parser;
use thoteca::Thoteca;
use thoteca::backend::{Backend, Memory};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

const DB_FILE: &str = "thoteca.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("thoteca=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILE);

    // Load or create the state file
    let backend = match Memory::load_from_file(&db_path) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::warn!("Failed to load state from {}: {e}. Starting fresh.", db_path.display());
            Memory::new()
        }
    };
    let instance = Thoteca::open(Box::new(backend));

    let result = match cli.command {
        Commands::Login(args) => commands::auth::login(&instance, &args),
        Commands::Logout => commands::auth::logout(&instance),
        Commands::Profile => commands::auth::profile(&instance),
        Commands::Book(command) => commands::book::run(&instance, command),
        Commands::Catalog => commands::catalog::list(&instance),
        Commands::Genres => commands::catalog::genres(),
        Commands::Theme(args) => commands::catalog::theme(&instance, &args),
        Commands::Upload(args) => commands::upload::send(&instance, &args),
    };

    // Persist the backend regardless of command outcome: completed
    // operations already mutated it, and failed ones changed nothing.
    if let Some(memory) = instance.backend().as_any().downcast_ref::<Memory>() {
        memory.save_to_file(&db_path)?;
    }

    result
}
