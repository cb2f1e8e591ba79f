// Common test utilities and helpers
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use pl_api::{create_app, AppState};
use pl_models::Match;
use pl_services::{EnrichmentPipeline, MatchRepository};

/// Three enriched fixtures with events, loaded the same way the server does.
pub fn season_fixtures() -> Vec<Match> {
    let raw = json!([
        {
            "date": "2024-08-17", "time": "15:00", "day": "Sat",
            "home": "Arsenal", "away": "Wolves", "goals_home": 2, "goals_away": 0,
            "attendance": "60,261", "venue": "Emirates Stadium", "referee": "John Brooks",
            "details": {
                "home": {
                    "players": [{"name": "Kai Havertz", "played_from": 0, "played_until": 90,
                                 "yellow_card": null, "red_card": null, "goals": [25], "assists": []}],
                    "events": [
                        {"minute": 25, "player": "Kai Havertz", "sub_player": null, "assist": "Bukayo Saka", "type": "goal"},
                        {"minute": 74, "player": "Bukayo Saka", "sub_player": null, "assist": "Kai Havertz", "type": "goal"}
                    ]
                },
                "away": {
                    "players": [],
                    "events": [{"minute": 60, "player": "Mario Lemina", "sub_player": null, "assist": null, "type": "yellow_card"}]
                }
            }
        },
        {
            "date": "2024-08-16", "time": "20:00", "day": "Fri",
            "home": "Manchester Utd", "away": "Fulham", "goals_home": 1, "goals_away": 0,
            "attendance": "73,297", "venue": "Old Trafford", "referee": "Robert Jones",
            "details": {
                "home": {"players": [], "events": [
                    {"minute": 87, "player": "Joshua Zirkzee", "sub_player": null, "assist": "Alejandro Garnacho", "type": "goal"}
                ]},
                "away": {"players": [], "events": []}
            }
        },
        {
            "date": "2024-08-24", "time": "17:30", "day": "Sat",
            "home": "Aston Villa", "away": "Arsenal", "goals_home": 0, "goals_away": 2,
            "attendance": "42,600", "venue": "Villa Park", "referee": "Anthony Taylor",
            "details": {
                "home": {"players": [], "events": [
                    {"minute": 45, "player": "Amadou Onana", "sub_player": null, "assist": null, "type": "red_card"}
                ]},
                "away": {"players": [], "events": [
                    {"minute": 67, "player": "Leandro Trossard", "sub_player": null, "assist": "Bukayo Saka", "type": "goal"},
                    {"minute": 77, "player": "Thomas Partey", "sub_player": null, "assist": null, "type": "penalty_goal"}
                ]}
            }
        }
    ]);

    EnrichmentPipeline::with_static_reference()
        .enrich_json(&raw.to_string())
        .unwrap()
}

pub fn create_test_app() -> (Router, Arc<MatchRepository>) {
    let repository = Arc::new(MatchRepository::with_matches(season_fixtures()));
    let app = create_app(AppState::with_static_reference(repository.clone()));
    (app, repository)
}

pub fn new_match_payload(home: &str, away: &str, date: &str) -> Value {
    json!({
        "date": date,
        "time": "15:00",
        "home": home,
        "away": away,
        "home_logo": "https://upload.wikimedia.org/wikipedia/fr/5/53/Arsenal_FC.svg",
        "away_logo": "https://upload.wikimedia.org/wikipedia/fr/5/51/Logo_Chelsea.svg",
        "goals_home": 2,
        "goals_away": 1,
        "venue": {"name": "Emirates Stadium", "latitude": 51.5549, "longitude": -0.1084},
        "is_favorite": false,
        "details": {"home": {"events": []}, "away": {"events": []}}
    })
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
