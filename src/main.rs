//! Chatshelf - file-backed chat transcript store
//!
#![doc = "Main entry point for the chatshelf binary."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatshelf::cli::{Cli, Commands};
use chatshelf::commands;
use chatshelf::config::Config;
use chatshelf::storage::ChatStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Serve { .. } => {
            tracing::info!("Starting HTTP server");
            commands::serve::run_serve(config).await
        }
        Commands::List { json } => {
            let store = open_store(&config)?;
            commands::chats::list_chats(&store, json).await
        }
        Commands::Show { id, json } => {
            let store = open_store(&config)?;
            commands::chats::show_chat(&store, &id, json).await
        }
        Commands::Import { file } => {
            tracing::debug!("Importing chat from: {}", file.display());
            let store = open_store(&config)?;
            commands::chats::import_chat(&store, &file).await?;
            Ok(())
        }
        Commands::Delete { id } => {
            let store = open_store(&config)?;
            commands::chats::delete_chat(&store, &id).await?;
            Ok(())
        }
    }
}

fn open_store(config: &Config) -> Result<ChatStore> {
    let directory = config.storage.resolve_directory()?;
    Ok(ChatStore::open(directory, config.storage.file_naming))
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "chatshelf=debug" } else { "chatshelf=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
