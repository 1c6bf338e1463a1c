use grocery_list::{config::Config, web, ItemService, ItemStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging (RUST_LOG overrides the default INFO level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Grocery list service starting...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = if config.mode.is_test() {
        info!("Test mode: seeding store with fixture items");
        ItemStore::seeded()
    } else {
        ItemStore::new()
    };

    let service = ItemService::new(store);

    if let Err(e) = web::run_web_server(config.addr, service).await {
        error!("Web server error: {:#}", e);
        std::process::exit(1);
    }
}
