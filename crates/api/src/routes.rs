use axum::{
    Router,
    routing::{get, put},
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use pl_models::{
    CardStats, Match, MatchDetailedView, MatchPatch, MatchScorers, MatchSummary, NewMatch,
    PlayerTally, RepositoryStats, SeasonStats, StandingRow,
};
use pl_services::{
    analytics, query, standings, MatchRepository, StaticReferenceData, TeamDirectory,
};

use crate::error::ApiError;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<MatchRepository>,
    pub teams: Arc<dyn TeamDirectory>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(repository: Arc<MatchRepository>, teams: Arc<dyn TeamDirectory>) -> Self {
        Self {
            repository,
            teams,
            started_at: Utc::now(),
        }
    }

    pub fn with_static_reference(repository: Arc<MatchRepository>) -> Self {
        Self::new(repository, Arc::new(StaticReferenceData::new()))
    }

    /// Substring filter on team names. A query that is also a trigram
    /// (`ARS`, `mun`) keeps the matches of the club it names as well.
    fn filter_by_team(&self, matches: Vec<Match>, team: Option<String>) -> Vec<Match> {
        match team.filter(|t| !t.is_empty()) {
            Some(team) => {
                let expanded = self.teams.team_for_trigram(&team);
                query::filter_by_team(matches, &team, expanded.as_deref())
            }
            None => matches,
        }
    }
}

#[derive(Deserialize)]
pub struct TeamFilter {
    pub team: Option<String>,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub term: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: String,
    pub matches: usize,
}

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub quick_test: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct FavoriteResponse {
    pub message: String,
    #[serde(rename = "match")]
    pub record: Match,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Service info
        .route("/", get(api_info))
        .route("/health", get(health_check))

        // Listings and projections
        .route("/matches", get(list_matches).post(create_match))
        .route("/matches/summary", get(matches_summary))
        .route("/matches/detailed", get(detailed_matches))
        .route("/matches/stats", get(repository_stats))
        .route("/matches/classement", get(classement))
        .route("/matches/search", axum::routing::post(search_matches))

        // Analytics
        .route("/matches/analytics/season", get(season_stats))
        .route("/matches/analytics/scorers", get(top_scorers))
        .route("/matches/analytics/assists", get(top_assists))
        .route("/matches/analytics/cards", get(card_stats))

        // Single match
        .route("/matches/:id", get(get_match).put(update_match).delete(delete_match))
        .route("/matches/:id/favorite", put(toggle_favorite))
        .route("/matches/:id/scorers", get(match_scorers))
}

/// Router with request tracing and permissive CORS, ready to serve.
pub fn create_app(state: AppState) -> Router {
    create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Soccer PL Matches Stats API",
        description: "REST API for Premier League 2024-2025 match statistics",
        version: env!("CARGO_PKG_VERSION"),
        quick_test: vec![
            "/matches/summary - match summaries",
            "/matches/detailed - detailed matches",
            "/matches/stats - overall statistics",
            "/matches/classement - Premier League table",
            "/matches/analytics/season - season leaderboards",
        ],
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.started_at);
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: format!("{}s", uptime.num_seconds()),
        matches: state.repository.count(),
    })
}

// Summary list, optionally filtered by team name or trigram
async fn list_matches(
    State(state): State<AppState>,
    params: Result<Query<TeamFilter>, QueryRejection>,
) -> ApiResult<Vec<MatchSummary>> {
    let Query(params) = params?;
    let matches = state.filter_by_team(state.repository.all(), params.team);
    Ok(Json(query::summaries(&matches)))
}

async fn matches_summary(State(state): State<AppState>) -> Json<Vec<MatchSummary>> {
    Json(query::summaries(&state.repository.all()))
}

async fn detailed_matches(
    State(state): State<AppState>,
    params: Result<Query<TeamFilter>, QueryRejection>,
) -> ApiResult<Vec<MatchDetailedView>> {
    let Query(params) = params?;
    let matches = state.filter_by_team(state.repository.all(), params.team);
    Ok(Json(query::detailed_views(&matches)))
}

async fn repository_stats(State(state): State<AppState>) -> Json<RepositoryStats> {
    Json(query::repository_stats(&state.repository.all()))
}

async fn classement(State(state): State<AppState>) -> Json<Vec<StandingRow>> {
    Json(standings(&state.repository.all()))
}

async fn search_matches(
    State(state): State<AppState>,
    request: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Vec<MatchSummary>> {
    let Json(request) = request?;
    let hits = query::search(state.repository.all(), &request.term);
    debug!("Search {:?}: {} hits", request.term, hits.len());
    Ok(Json(query::summaries(&hits)))
}

async fn season_stats(State(state): State<AppState>) -> Json<SeasonStats> {
    Json(analytics::season_stats(&state.repository.all()))
}

async fn top_scorers(
    State(state): State<AppState>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> ApiResult<Vec<PlayerTally>> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(analytics::DEFAULT_LEADERBOARD_SIZE);
    Ok(Json(analytics::top_scorers(&state.repository.all(), limit)))
}

async fn top_assists(
    State(state): State<AppState>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> ApiResult<Vec<PlayerTally>> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(analytics::DEFAULT_LEADERBOARD_SIZE);
    Ok(Json(analytics::top_assists(&state.repository.all(), limit)))
}

async fn card_stats(State(state): State<AppState>) -> Json<CardStats> {
    Json(analytics::card_stats(&state.repository.all()))
}

async fn get_match(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Match> {
    Ok(Json(state.repository.get(&id)?))
}

async fn match_scorers(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<MatchScorers> {
    let record = state.repository.get(&id)?;
    Ok(Json(analytics::match_scorers(&record)))
}

async fn update_match(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<Match> {
    let Json(body) = body?;
    let patch = MatchPatch::from_json(body)?;
    let updated = state.repository.update(&id, patch)?;
    info!("✏️  Updated match {}", id);
    Ok(Json(updated))
}

async fn toggle_favorite(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<FavoriteResponse> {
    let record = state.repository.toggle_favorite(&id)?;
    let action = if record.is_favorite { "ajouté aux" } else { "retiré des" };
    Ok(Json(FavoriteResponse {
        message: format!("Match {action} favoris"),
        record,
    }))
}

async fn create_match(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Match>), ApiError> {
    let Json(body) = body?;
    let new_match = NewMatch::from_json(body)?;
    let created = state.repository.create(new_match);
    info!("➕ Created match {} ({} vs {})", created.id, created.home, created.away);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_match(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<MessageResponse> {
    state.repository.delete(&id)?;
    info!("🗑️  Deleted match {}", id);
    Ok(Json(MessageResponse {
        message: format!("Match {id} supprimé avec succès"),
    }))
}
