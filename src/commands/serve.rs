use crate::config::Config;
use crate::error::Result;
use crate::server;
use crate::storage::ChatStore;

/// Open the configured store and run the HTTP API until shutdown
pub async fn run_serve(config: Config) -> Result<()> {
    let directory = config.storage.resolve_directory()?;
    let store = ChatStore::open(directory, config.storage.file_naming);
    tracing::info!(
        "Chat files named by {} in {}",
        store.naming(),
        store.directory().display()
    );

    server::serve(store, &config.server).await
}
