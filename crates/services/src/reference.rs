//! Reference lookups used by enrichment: stadiums, team logos and trigrams.
//!
//! Enrichment only talks to the [`VenueResolver`] and [`TeamDirectory`]
//! traits; [`StaticReferenceData`] is the built-in Premier League table.

use pl_models::Venue;
use std::collections::HashMap;

pub const PLACEHOLDER_LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/ac/No_image_available.svg";

pub const FALLBACK_LATITUDE: f64 = 51.5074;
pub const FALLBACK_LONGITUDE: f64 = -0.1278;
pub const FALLBACK_CITY: &str = "Unknown";
pub const FALLBACK_CAPACITY: &str = "N/A";

#[cfg_attr(test, mockall::automock)]
pub trait VenueResolver: Send + Sync {
    /// Always returns a venue; unknown names get a synthetic fallback.
    fn resolve_venue(&self, name: &str) -> Venue;
}

#[cfg_attr(test, mockall::automock)]
pub trait TeamDirectory: Send + Sync {
    fn logo(&self, team: &str) -> String;
    fn trigram(&self, team: &str) -> String;
    /// Club named by a trigram such as `ars`, case-insensitive.
    fn team_for_trigram(&self, trigram: &str) -> Option<String>;
}

/// Venue used when a stadium name is not in the table.
pub fn fallback_venue(name: &str) -> Venue {
    Venue::new(name, FALLBACK_LATITUDE, FALLBACK_LONGITUDE, FALLBACK_CITY)
        .with_capacity(FALLBACK_CAPACITY)
}

/// First three characters, upper-cased.
pub fn derived_trigram(team: &str) -> String {
    team.chars().take(3).collect::<String>().to_uppercase()
}

// (name, latitude, longitude, city, capacity)
const STADIUMS: &[(&str, f64, f64, &str, &str)] = &[
    ("Old Trafford", 53.4631, -2.2914, "Manchester", "74,310"),
    ("Emirates Stadium", 51.5549, -0.1084, "London", "60,704"),
    ("Stamford Bridge", 51.4817, -0.1910, "London", "40,341"),
    ("Anfield", 53.4308, -2.9609, "Liverpool", "53,394"),
    ("Etihad Stadium", 53.4831, -2.2004, "Manchester", "53,400"),
    ("Tottenham Hotspur Stadium", 51.6042, -0.0664, "London", "62,850"),
    ("London Stadium", 51.5388, -0.0166, "London", "66,000"),
    ("St. James' Park", 54.9756, -1.6219, "Newcastle", "52,305"),
    ("Villa Park", 52.5097, -1.8847, "Birmingham", "42,682"),
    ("Goodison Park", 53.4388, -2.9664, "Liverpool", "39,414"),
    ("Craven Cottage", 51.4749, -0.2217, "London", "19,359"),
    ("Selhurst Park", 51.3983, -0.0856, "London", "25,486"),
    ("American Express Stadium", 50.8612, -0.0835, "Brighton", "31,800"),
    ("Molineux Stadium", 52.5902, -2.1303, "Wolverhampton", "31,700"),
    ("Bramall Lane", 53.3705, -1.4709, "Sheffield", "32,050"),
    ("Vitality Stadium", 50.7352, -1.8384, "Bournemouth", "11,464"),
    ("Turf Moor", 53.7890, -2.2309, "Burnley", "21,944"),
    ("Brentford Community Stadium", 51.4906, -0.2891, "London", "17,250"),
    ("The City Ground", 52.9404, -1.1327, "Nottingham", "30,445"),
    ("Carrow Road", 52.6220, 1.3089, "Norwich", "27,244"),
];

// (team, trigram, logo)
const TEAMS: &[(&str, &str, &str)] = &[
    ("Manchester Utd", "MUN", "https://upload.wikimedia.org/wikipedia/fr/b/b9/Logo_Manchester_United.svg"),
    ("Manchester City", "MCI", "https://upload.wikimedia.org/wikipedia/sco/e/eb/Manchester_City_FC_badge.svg"),
    ("Arsenal", "ARS", "https://upload.wikimedia.org/wikipedia/fr/5/53/Arsenal_FC.svg"),
    ("Chelsea", "CHE", "https://upload.wikimedia.org/wikipedia/fr/5/51/Logo_Chelsea.svg"),
    ("Liverpool", "LIV", "https://upload.wikimedia.org/wikipedia/sco/0/0c/Liverpool_FC.svg"),
    ("Tottenham", "TOT", "https://upload.wikimedia.org/wikipedia/fr/5/5c/Logo_Tottenham_Hotspur.svg"),
    ("West Ham", "WHU", "https://upload.wikimedia.org/wikipedia/sco/c/c2/West_Ham_United_FC_logo.svg"),
    ("Newcastle Utd", "NEW", "https://upload.wikimedia.org/wikipedia/fr/a/a4/Logo_Newcastle_United_FC.svg"),
    ("Aston Villa", "AVL", "https://upload.wikimedia.org/wikipedia/fr/e/e5/Logo_Aston_Villa.svg"),
    ("Everton", "EVE", "https://upload.wikimedia.org/wikipedia/sco/7/7c/Everton_FC_logo.svg"),
    ("Fulham", "FUL", "https://upload.wikimedia.org/wikipedia/fr/c/ce/Logo_Fulham.svg"),
    ("Crystal Palace", "CRY", "https://upload.wikimedia.org/wikipedia/sco/0/0c/Crystal_Palace_FC_logo.svg"),
    ("Brighton", "BHA", "https://upload.wikimedia.org/wikipedia/fr/d/dd/Logo_Brighton_%26_Hove_Albion_2024.svg"),
    // TODO: replace with the Wolverhampton crest; the source table reuses Brighton's.
    ("Wolves", "WOL", "https://upload.wikimedia.org/wikipedia/fr/d/dd/Logo_Brighton_%26_Hove_Albion_2024.svg"),
    ("Sheffield Utd", "SHU", "https://upload.wikimedia.org/wikipedia/fr/a/a5/Logo_Sheffield_United_FC.svg"),
    ("Bournemouth", "BOU", "https://upload.wikimedia.org/wikipedia/fr/c/c7/Logo_AFC_Bournemouth_2013_%28Alternatif%29.svg"),
    ("Burnley", "BUR", "https://upload.wikimedia.org/wikipedia/fr/0/02/Logo_Burnley_FC_2023.svg"),
    ("Brentford", "BRE", "https://upload.wikimedia.org/wikipedia/fr/3/3d/Logo_Brentford_FC_-_2017.svg"),
    ("Nott'm Forest", "NFO", "https://upload.wikimedia.org/wikipedia/fr/3/37/Logo_Nottingham_Forest_FC.svg"),
    ("Norwich City", "NOR", "https://upload.wikimedia.org/wikipedia/fr/6/69/Logo_Norwich_City_FC_2022.svg"),
    ("Leeds United", "LEE", "https://upload.wikimedia.org/wikipedia/fr/7/78/Logo_Leeds_United_FC.svg"),
    ("Leicester City", "LEI", "https://upload.wikimedia.org/wikipedia/sco/2/2d/Leicester_City_crest.svg"),
    ("Ipswich Town", "IPS", "https://upload.wikimedia.org/wikipedia/fr/f/ff/Logo_Ipswich_Town_2024.svg"),
    ("Southampton", "SOU", "https://upload.wikimedia.org/wikipedia/fr/5/54/Southampton_FC.svg"),
];

#[derive(Debug, Clone)]
pub struct StaticReferenceData {
    venues: HashMap<&'static str, Venue>,
    logos: HashMap<&'static str, &'static str>,
    trigrams: HashMap<&'static str, &'static str>,
    teams_by_trigram: HashMap<&'static str, &'static str>,
}

impl StaticReferenceData {
    pub fn new() -> Self {
        let venues = STADIUMS
            .iter()
            .map(|&(name, latitude, longitude, city, capacity)| {
                (name, Venue::new(name, latitude, longitude, city).with_capacity(capacity))
            })
            .collect();

        Self {
            venues,
            logos: TEAMS.iter().map(|&(team, _, logo)| (team, logo)).collect(),
            trigrams: TEAMS.iter().map(|&(team, trigram, _)| (team, trigram)).collect(),
            teams_by_trigram: TEAMS.iter().map(|&(team, trigram, _)| (trigram, team)).collect(),
        }
    }
}

impl Default for StaticReferenceData {
    fn default() -> Self {
        Self::new()
    }
}

impl VenueResolver for StaticReferenceData {
    fn resolve_venue(&self, name: &str) -> Venue {
        self.venues
            .get(name)
            .cloned()
            .unwrap_or_else(|| fallback_venue(name))
    }
}

impl TeamDirectory for StaticReferenceData {
    fn logo(&self, team: &str) -> String {
        self.logos
            .get(team)
            .copied()
            .unwrap_or(PLACEHOLDER_LOGO_URL)
            .to_string()
    }

    fn trigram(&self, team: &str) -> String {
        self.trigrams
            .get(team)
            .map_or_else(|| derived_trigram(team), |t| (*t).to_string())
    }

    fn team_for_trigram(&self, trigram: &str) -> Option<String> {
        self.teams_by_trigram
            .get(trigram.to_uppercase().as_str())
            .map(|team| (*team).to_string())
    }
}
