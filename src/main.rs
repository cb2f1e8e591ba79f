use anyhow::Result;
use pl_api::{create_app, AppState};
use pl_services::{bootstrap, MatchRepository};
use pl_stats::{init_tracing, AppConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    info!("🚀 Starting Soccer PL Matches Stats API");

    // Load configuration
    let config = AppConfig::new()?;
    info!("✅ Configuration loaded successfully");
    info!("📂 Dataset: {}", config.data.dataset_path.display());
    info!("🌐 Server will bind to: {}", config.server_addr());

    let repository = Arc::new(MatchRepository::new());

    // Snapshot load and remote probe run side by side; only the snapshot is awaited
    let (loaded, probe_handle) = bootstrap(
        &repository,
        &config.data.dataset_path,
        config.data.probe_url.clone(),
        config.probe_timeout(),
    )
    .await;
    info!("⚽ {} matches ready to serve", loaded);

    let app = create_app(AppState::with_static_reference(repository));
    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("✅ Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("👋 Shutting down gracefully");
        })
        .await?;

    if let Some(handle) = probe_handle {
        handle.abort();
    }

    Ok(())
}
