use serde::{Deserialize, Serialize};

use crate::events::MatchDetails;

/// One record of the raw, unenriched dataset. The venue is only a name and
/// there are no logos or id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMatch {
    pub date: String,
    pub time: String,
    pub day: String,
    pub home: String,
    pub away: String,
    pub goals_home: u32,
    pub goals_away: u32,
    pub attendance: String,
    pub venue: String,
    pub referee: String,
    #[serde(default)]
    pub details: MatchDetails,
}
