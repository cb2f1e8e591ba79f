use pl_models::{validate_date, validate_goals, Match, RawMatch, Result, StatsError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::reference::{StaticReferenceData, TeamDirectory, VenueResolver};

/// Turns raw dataset records into fully resolved [`Match`] records.
#[derive(Clone)]
pub struct EnrichmentPipeline {
    venues: Arc<dyn VenueResolver>,
    teams: Arc<dyn TeamDirectory>,
}

impl EnrichmentPipeline {
    pub fn new(venues: Arc<dyn VenueResolver>, teams: Arc<dyn TeamDirectory>) -> Self {
        Self { venues, teams }
    }

    pub fn with_static_reference() -> Self {
        let reference = Arc::new(StaticReferenceData::new());
        Self::new(reference.clone(), reference)
    }

    /// `{home_trigram}-vs-{away_trigram}-{date}`. Two fixtures between the same
    /// clubs on the same date collide.
    pub fn match_id(&self, home: &str, away: &str, date: &str) -> String {
        format!("{}-vs-{}-{}", self.teams.trigram(home), self.teams.trigram(away), date)
    }

    pub fn enrich(&self, raw: RawMatch) -> Match {
        let id = self.match_id(&raw.home, &raw.away, &raw.date);
        let venue = self.venues.resolve_venue(&raw.venue);

        Match {
            id,
            home_logo: self.teams.logo(&raw.home),
            away_logo: self.teams.logo(&raw.away),
            date: raw.date,
            time: raw.time,
            day: raw.day,
            home: raw.home,
            away: raw.away,
            goals_home: raw.goals_home,
            goals_away: raw.goals_away,
            attendance: raw.attendance,
            venue,
            referee: raw.referee,
            is_favorite: false,
            details: raw.details,
        }
    }

    /// All-or-nothing: the first invalid record aborts the whole run.
    pub fn enrich_all(&self, raws: Vec<RawMatch>) -> Result<Vec<Match>> {
        for (index, raw) in raws.iter().enumerate() {
            check_raw(index, raw)?;
        }
        Ok(raws.into_iter().map(|raw| self.enrich(raw)).collect())
    }

    /// Parses a JSON array of raw records, then enriches it.
    pub fn enrich_json(&self, input: &str) -> Result<Vec<Match>> {
        let records: Vec<serde_json::Value> = serde_json::from_str(input)?;

        let raws = records
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<RawMatch>(value).map_err(|e| StatsError::Ingestion {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.enrich_all(raws)
    }

    /// Reads the raw dataset at `input` and writes the enriched snapshot to
    /// `output`. Nothing is written when enrichment fails.
    pub async fn enrich_file(&self, input: &Path, output: &Path) -> Result<usize> {
        info!("📥 Loading raw dataset from {}", input.display());
        let raw = tokio::fs::read_to_string(input).await?;

        let enriched = self.enrich_json(&raw)?;
        debug!("Enriched {} records, serializing snapshot", enriched.len());

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(&enriched)?;
        tokio::fs::write(output, body).await?;

        info!("💾 Enriched dataset written to {}: {} matches", output.display(), enriched.len());
        Ok(enriched.len())
    }
}

fn check_raw(index: usize, raw: &RawMatch) -> Result<()> {
    let ingestion = |reason: String| StatsError::Ingestion { index, reason };

    if raw.home.trim().is_empty() {
        return Err(ingestion("home team is empty".to_string()));
    }
    if raw.away.trim().is_empty() {
        return Err(ingestion("away team is empty".to_string()));
    }
    validate_goals("goals_home", raw.goals_home)
        .and(validate_goals("goals_away", raw.goals_away))
        .and(validate_date(&raw.date))
        .map_err(|e| ingestion(e.to_string()))
}
