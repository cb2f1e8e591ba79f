use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::events::MatchDetails;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
}

/// A fully resolved match record as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub date: String,
    pub time: String,
    pub day: String,
    pub home: String,
    pub away: String,
    pub home_logo: String,
    pub away_logo: String,
    pub goals_home: u32,
    pub goals_away: u32,
    pub attendance: String,
    pub venue: Venue,
    pub referee: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub details: MatchDetails,
}

/// Outcome of a match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    HomeWin,
    Draw,
    AwayWin,
}

impl Venue {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            city: city.into(),
            capacity: None,
        }
    }

    pub fn with_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = Some(capacity.into());
        self
    }
}

impl Match {
    /// Calendar date of the fixture, `None` when the stored string is not `YYYY-MM-DD`.
    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn result(&self) -> MatchResult {
        match self.goals_home.cmp(&self.goals_away) {
            std::cmp::Ordering::Greater => MatchResult::HomeWin,
            std::cmp::Ordering::Less => MatchResult::AwayWin,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }

    pub fn involves_team(&self, query_lowercase: &str) -> bool {
        self.home.to_lowercase().contains(query_lowercase)
            || self.away.to_lowercase().contains(query_lowercase)
    }
}
