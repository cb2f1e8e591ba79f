//! Read projections, team filter and free-text search.
//!
//! Every function takes the date-ordered output of
//! [`MatchRepository::all`](crate::MatchRepository::all) and preserves its order.

use pl_models::{Match, MatchDetailedView, MatchSummary, RepositoryStats};
use std::collections::HashSet;

use crate::analytics::match_scorers;

pub fn summaries<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<MatchSummary> {
    matches.into_iter().map(MatchSummary::from).collect()
}

pub fn detailed_view(m: &Match) -> MatchDetailedView {
    MatchDetailedView {
        summary: MatchSummary::from(m),
        day: m.day.clone(),
        attendance: m.attendance.clone(),
        referee: m.referee.clone(),
        venue_city: m.venue.city.clone(),
        scorers: match_scorers(m),
    }
}

pub fn detailed_views<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<MatchDetailedView> {
    matches.into_iter().map(detailed_view).collect()
}

/// Case-insensitive substring match on the home or away team. When the query
/// is also a trigram, `expanded` is the club it names and its matches are kept too.
pub fn filter_by_team(matches: Vec<Match>, team: &str, expanded: Option<&str>) -> Vec<Match> {
    let needle = team.to_lowercase();
    let alias = expanded.map(str::to_lowercase);
    matches
        .into_iter()
        .filter(|m| {
            m.involves_team(&needle) || alias.as_deref().is_some_and(|a| m.involves_team(a))
        })
        .collect()
}

/// Case-insensitive substring match on teams, venue name and venue city.
pub fn search(matches: Vec<Match>, term: &str) -> Vec<Match> {
    let needle = term.to_lowercase();
    matches
        .into_iter()
        .filter(|m| {
            m.involves_team(&needle)
                || m.venue.name.to_lowercase().contains(&needle)
                || m.venue.city.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn repository_stats(matches: &[Match]) -> RepositoryStats {
    let venues: HashSet<&str> = matches.iter().map(|m| m.venue.name.as_str()).collect();
    let teams: HashSet<&str> = matches
        .iter()
        .flat_map(|m| [m.home.as_str(), m.away.as_str()])
        .collect();

    RepositoryStats {
        total_matches: matches.len(),
        total_venues: venues.len(),
        total_teams: teams.len(),
        favorites_count: matches.iter().filter(|m| m.is_favorite).count(),
    }
}
