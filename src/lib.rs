//! Shared setup for the `pl-stats` server and the `enrich` maintenance task.

pub mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::AppConfig;

/// Installs the global tracing subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pl_stats=debug,pl_api=debug,pl_services=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
