use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::events::MatchDetails;
use crate::matches::{Match, Venue, DATE_FORMAT};

/// Payload for creating a match; the repository assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMatch {
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub day: String,
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub home_logo: String,
    #[serde(default)]
    pub away_logo: String,
    #[serde(default)]
    pub goals_home: u32,
    #[serde(default)]
    pub goals_away: u32,
    #[serde(default)]
    pub attendance: String,
    pub venue: Venue,
    #[serde(default)]
    pub referee: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub details: MatchDetails,
}

/// Partial update. Every present field replaces the stored one wholesale;
/// `venue` and `details` are not merged recursively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub day: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub home_logo: Option<String>,
    pub away_logo: Option<String>,
    pub goals_home: Option<u32>,
    pub goals_away: Option<u32>,
    pub attendance: Option<String>,
    pub venue: Option<Venue>,
    pub referee: Option<String>,
    pub is_favorite: Option<bool>,
    pub details: Option<MatchDetails>,
}

fn from_json_payload<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| StatsError::Validation(e.to_string()))
}

pub fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| StatsError::Validation(format!("date must be YYYY-MM-DD, got {date:?}")))
}

/// Highest score accepted for one side of a match.
pub const MAX_GOALS: u32 = 99;

pub fn validate_goals(field: &str, goals: u32) -> Result<()> {
    if goals > MAX_GOALS {
        return Err(StatsError::Validation(format!(
            "{field} must be between 0 and {MAX_GOALS}, got {goals}"
        )));
    }
    Ok(())
}

pub fn validate_team_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StatsError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn validate_venue(venue: &Venue) -> Result<()> {
    if venue.name.trim().is_empty() {
        return Err(StatsError::Validation("venue.name must not be empty".to_string()));
    }
    if !venue.latitude.is_finite() || !(-90.0..=90.0).contains(&venue.latitude) {
        return Err(StatsError::Validation(format!(
            "venue.latitude out of range: {}",
            venue.latitude
        )));
    }
    if !venue.longitude.is_finite() || !(-180.0..=180.0).contains(&venue.longitude) {
        return Err(StatsError::Validation(format!(
            "venue.longitude out of range: {}",
            venue.longitude
        )));
    }
    Ok(())
}

impl NewMatch {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let new_match: Self = from_json_payload(value)?;
        new_match.validate()?;
        Ok(new_match)
    }

    pub fn validate(&self) -> Result<()> {
        validate_date(&self.date)?;
        validate_team_name("home", &self.home)?;
        validate_team_name("away", &self.away)?;
        validate_goals("goals_home", self.goals_home)?;
        validate_goals("goals_away", self.goals_away)?;
        validate_venue(&self.venue)
    }

    pub fn into_match(self, id: String) -> Match {
        Match {
            id,
            date: self.date,
            time: self.time,
            day: self.day,
            home: self.home,
            away: self.away,
            home_logo: self.home_logo,
            away_logo: self.away_logo,
            goals_home: self.goals_home,
            goals_away: self.goals_away,
            attendance: self.attendance,
            venue: self.venue,
            referee: self.referee,
            is_favorite: self.is_favorite,
            details: self.details,
        }
    }
}

impl From<Match> for NewMatch {
    fn from(m: Match) -> Self {
        Self {
            date: m.date,
            time: m.time,
            day: m.day,
            home: m.home,
            away: m.away,
            home_logo: m.home_logo,
            away_logo: m.away_logo,
            goals_home: m.goals_home,
            goals_away: m.goals_away,
            attendance: m.attendance,
            venue: m.venue,
            referee: m.referee,
            is_favorite: m.is_favorite,
            details: m.details,
        }
    }
}

impl MatchPatch {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let patch: Self = from_json_payload(value)?;
        patch.validate()?;
        Ok(patch)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(date) = &self.date {
            validate_date(date)?;
        }
        if let Some(home) = &self.home {
            validate_team_name("home", home)?;
        }
        if let Some(away) = &self.away {
            validate_team_name("away", away)?;
        }
        if let Some(goals) = self.goals_home {
            validate_goals("goals_home", goals)?;
        }
        if let Some(goals) = self.goals_away {
            validate_goals("goals_away", goals)?;
        }
        if let Some(venue) = &self.venue {
            validate_venue(venue)?;
        }
        Ok(())
    }

    /// Shallow merge onto `target`. The id is never touched.
    pub fn apply(self, target: &mut Match) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut target.date, self.date);
        set(&mut target.time, self.time);
        set(&mut target.day, self.day);
        set(&mut target.home, self.home);
        set(&mut target.away, self.away);
        set(&mut target.home_logo, self.home_logo);
        set(&mut target.away_logo, self.away_logo);
        set(&mut target.goals_home, self.goals_home);
        set(&mut target.goals_away, self.goals_away);
        set(&mut target.attendance, self.attendance);
        set(&mut target.venue, self.venue);
        set(&mut target.referee, self.referee);
        set(&mut target.is_favorite, self.is_favorite);
        set(&mut target.details, self.details);
    }
}
