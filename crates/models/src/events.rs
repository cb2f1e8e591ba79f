use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u32,
    pub player: String,
    #[serde(default)]
    pub sub_player: Option<String>,
    #[serde(default)]
    pub assist: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

/// Kinds of in-match events recorded in the dataset.
///
/// Deserialization rejects anything outside these five tags, which is how
/// unknown event types are refused at ingestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    YellowCard,
    RedCard,
    SubstituteIn,
    PenaltyGoal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub name: String,
    pub played_from: u32,
    pub played_until: u32,
    #[serde(default)]
    pub yellow_card: Option<u32>,
    #[serde(default)]
    pub red_card: Option<u32>,
    #[serde(default)]
    pub goals: Vec<u32>,
    #[serde(default)]
    pub assists: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamDetails {
    #[serde(default)]
    pub players: Vec<PlayerStats>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchDetails {
    #[serde(default)]
    pub home: TeamDetails,
    #[serde(default)]
    pub away: TeamDetails,
}

impl MatchEvent {
    pub fn new(minute: u32, player: impl Into<String>, event_type: EventType) -> Self {
        Self {
            minute,
            player: player.into(),
            sub_player: None,
            assist: None,
            event_type,
        }
    }

    pub fn with_assist(mut self, assist: impl Into<String>) -> Self {
        self.assist = Some(assist.into());
        self
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.event_type, EventType::Goal | EventType::PenaltyGoal)
    }
}

impl MatchDetails {
    /// Home events followed by away events, each side in stored order.
    pub fn events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.home.events.iter().chain(self.away.events.iter())
    }
}
