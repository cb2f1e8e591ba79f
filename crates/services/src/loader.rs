//! Startup data sources: the enriched snapshot file and the remote probe.

use anyhow::{Context, Result};
use pl_models::Match;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::repository::MatchRepository;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn read_snapshot(path: &Path) -> Result<Vec<Match>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let matches = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    Ok(matches)
}

/// Loads the snapshot into `repository`. A missing or malformed file is
/// logged and leaves the repository as it was; returns the number of records loaded.
pub async fn load_snapshot(repository: &MatchRepository, path: &Path) -> usize {
    match read_snapshot(path).await {
        Ok(matches) => {
            let loaded = matches.len();
            let overwritten = repository.put_all(matches);
            if overwritten > 0 {
                warn!("⚠️  {} duplicate match ids in snapshot, last occurrence kept", overwritten);
            }
            info!("📂 Loaded {} matches from {}", loaded, path.display());
            loaded
        }
        Err(e) => {
            warn!("📂 Snapshot unavailable, starting with {} matches: {:#}", repository.count(), e);
            0
        }
    }
}

/// Best-effort reachability check of the remote dataset. The response body
/// is discarded; nothing is loaded from it.
pub async fn probe_remote(url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    info!("🌐 Remote dataset reachable ({}), available for future enrichment", response.status());
    Ok(())
}

/// Spawns the optional probe in the background, then loads the snapshot.
/// The two run concurrently and neither failure affects the other; the
/// caller never waits on the probe unless it awaits the returned handle.
pub async fn bootstrap(
    repository: &MatchRepository,
    snapshot: &Path,
    probe_url: Option<String>,
    probe_timeout: Duration,
) -> (usize, Option<JoinHandle<()>>) {
    let probe = probe_url.map(|url| {
        tokio::spawn(async move {
            if let Err(e) = probe_remote(&url, probe_timeout).await {
                warn!("🌐 Remote dataset unavailable: {}", e);
            }
        })
    });

    let loaded = load_snapshot(repository, snapshot).await;
    (loaded, probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::EnrichmentPipeline;
    use pl_models::RawMatch;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pl-stats-{}-{}", std::process::id(), name))
    }

    fn enriched() -> Vec<Match> {
        let pipeline = EnrichmentPipeline::with_static_reference();
        let raw: Vec<RawMatch> = serde_json::from_value(serde_json::json!([
            {"date": "2024-08-16", "time": "20:00", "day": "Fri", "home": "Manchester Utd", "away": "Fulham",
             "goals_home": 1, "goals_away": 0, "attendance": "73,297", "venue": "Old Trafford", "referee": "Robert Jones"},
            {"date": "2024-08-17", "time": "12:30", "day": "Sat", "home": "Ipswich Town", "away": "Liverpool",
             "goals_home": 0, "goals_away": 2, "attendance": "29,780", "venue": "Portman Road", "referee": "Tim Robinson"}
        ]))
        .unwrap();
        pipeline.enrich_all(raw).unwrap()
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let path = temp_path("snapshot.json");
        tokio::fs::write(&path, serde_json::to_string(&enriched()).unwrap()).await.unwrap();

        let repository = MatchRepository::new();
        assert_eq!(load_snapshot(&repository, &path).await, 2);
        assert!(repository.get("MUN-vs-FUL-2024-08-16").is_ok());
        assert_eq!(repository.get("IPS-vs-LIV-2024-08-17").unwrap().venue.city, "Unknown");

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_tolerated() {
        let repository = MatchRepository::new();
        let loaded = load_snapshot(&repository, Path::new("/nonexistent/dataset-enriched.json")).await;

        assert_eq!(loaded, 0);
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_loads_nothing() {
        let path = temp_path("broken.json");
        tokio::fs::write(&path, "[{\"id\": \"half a record\"").await.unwrap();

        let repository = MatchRepository::new();
        assert_eq!(load_snapshot(&repository, &path).await, 0);
        assert!(repository.is_empty());

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn test_bootstrap_survives_unreachable_probe() {
        let path = temp_path("bootstrap.json");
        tokio::fs::write(&path, serde_json::to_string(&enriched()).unwrap()).await.unwrap();

        let repository = MatchRepository::new();
        let (loaded, probe) = bootstrap(
            &repository,
            &path,
            Some("http://127.0.0.1:9/dataset.json".to_string()),
            Duration::from_millis(200),
        )
        .await;

        assert_eq!(loaded, 2);
        assert_eq!(repository.count(), 2);
        probe.expect("probe spawned").await.unwrap();

        tokio::fs::remove_file(&path).await.ok();
    }
}
