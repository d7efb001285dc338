use dotenvy::dotenv;
use exchange_buddy::config::Settings;
use exchange_buddy::errors::{Error, Result};
use exchange_buddy::store::ExchangeStore;
use exchange_buddy::{bot, health};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Resolve settings from the environment
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Failed to load settings from environment: {e}"))?;

    // 4. Open the ledger store (fatal if the file is missing or malformed)
    let store = ExchangeStore::open(&settings.ledger_path)
        .await
        .inspect(|_| info!("Ledger store initialized successfully."))
        .inspect_err(|e| error!("Failed to open ledger at {}: {e}", settings.ledger_path))?;
    let store = Arc::new(store);

    // 5. Serve the liveness route in the background
    let health_port = settings.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::run_health_server(health_port).await {
            error!("Health server exited: {e}");
        }
    });

    // 6. Run the bot
    bot::run_bot(settings.token, settings.guild_id, Arc::clone(&store))
        .await
        .map_err(Error::from)?;

    Ok(())
}
