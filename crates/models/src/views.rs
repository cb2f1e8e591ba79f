//! Read projections and derived statistics returned by the API.

use serde::{Deserialize, Serialize};

use crate::matches::Match;

/// Flattened list-view of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSummary {
    pub id: String,
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub home_logo: String,
    pub away_logo: String,
    pub goals_home: u32,
    pub goals_away: u32,
    pub venue_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchScorers {
    pub home: Vec<String>,
    pub away: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchDetailedView {
    #[serde(flatten)]
    pub summary: MatchSummary,
    pub day: String,
    pub attendance: String,
    pub referee: String,
    pub venue_city: String,
    pub scorers: MatchScorers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryStats {
    pub total_matches: usize,
    pub total_venues: usize,
    pub total_teams: usize,
    pub favorites_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerTally {
    pub player: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardStats {
    pub top_yellow_cards: Vec<PlayerTally>,
    pub top_red_cards: Vec<PlayerTally>,
    pub total_yellow_cards: u32,
    pub total_red_cards: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonStats {
    pub total_matches: usize,
    pub total_teams: usize,
    pub total_venues: usize,
    pub top_scorers: Vec<PlayerTally>,
    pub top_assists: Vec<PlayerTally>,
    pub cards: CardStats,
}

/// One row of the league table. Field names follow the French table headings
/// used by the public API: matchs joués, gagnés, nuls, perdus, buts pour,
/// buts contre, différence de buts, points.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    pub position: usize,
    pub club: String,
    pub mj: u32,
    pub g: u32,
    pub n: u32,
    pub p: u32,
    pub bp: u32,
    pub bc: u32,
    pub db: i64,
    pub pts: u32,
}

impl From<&Match> for MatchSummary {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            date: m.date.clone(),
            time: m.time.clone(),
            home_team: m.home.clone(),
            away_team: m.away.clone(),
            home_logo: m.home_logo.clone(),
            away_logo: m.away_logo.clone(),
            goals_home: m.goals_home,
            goals_away: m.goals_away,
            venue_name: m.venue.name.clone(),
            latitude: m.venue.latitude,
            longitude: m.venue.longitude,
            is_favorite: m.is_favorite,
        }
    }
}

impl StandingRow {
    pub fn new(club: impl Into<String>) -> Self {
        Self {
            club: club.into(),
            ..Self::default()
        }
    }

    /// Records one finished match from this club's side.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.mj += 1;
        self.bp = self.bp.saturating_add(goals_for);
        self.bc = self.bc.saturating_add(goals_against);
        self.db = i64::from(self.bp) - i64::from(self.bc);

        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => {
                self.g += 1;
                self.pts += 3;
            }
            std::cmp::Ordering::Equal => {
                self.n += 1;
                self.pts += 1;
            }
            std::cmp::Ordering::Less => {
                self.p += 1;
            }
        }
    }
}
