//! Maintenance task: turns the raw dataset into the enriched snapshot the
//! server loads at startup.

use anyhow::{Context, Result};
use pl_services::EnrichmentPipeline;
use pl_stats::{init_tracing, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::new()?;
    let pipeline = EnrichmentPipeline::with_static_reference();

    let count = pipeline
        .enrich_file(&config.enrichment.raw_path, &config.enrichment.output_path)
        .await
        .context("enrichment failed, no snapshot written")?;

    info!("✅ Enriched dataset created: {} matches processed", count);
    Ok(())
}
