//! Medical tables HTTP server binary.

use medtab_loader::{TableFiles, TableStore};
use medtab_service::{build_router, AppState};
use medtab_types::Table;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Get data directory from env or use the working directory
    let data_dir = std::env::var("MEDTAB_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    tracing::info!("Resolving table files under: {}", data_dir);

    let files = TableFiles::discover(&data_dir);

    // Load must complete before the listener starts accepting requests.
    // A table that fails to load serves empty; the service starts anyway.
    let store = TableStore::load(&files);
    tracing::info!(
        "Loaded {} CID-10 and {} SIGTAP records",
        store.len(Table::Cid10),
        store.len(Table::Sigtap)
    );

    let app = build_router(AppState::new(store));

    // Get port from env or use default
    let port = std::env::var("MEDTAB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Starting medical tables HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
