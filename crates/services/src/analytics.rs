//! Leaderboards and season totals derived from per-match event streams.

use pl_models::{CardStats, EventType, Match, MatchEvent, MatchScorers, PlayerTally, SeasonStats};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

fn scorer_label(event: &MatchEvent) -> String {
    match &event.assist {
        Some(assist) => format!("{} ({})", event.player, assist),
        None => event.player.clone(),
    }
}

/// Goalscorers of one match per side, in event order, with the assist in parentheses.
pub fn match_scorers(m: &Match) -> MatchScorers {
    let side = |events: &[MatchEvent]| -> Vec<String> {
        events.iter().filter(|e| e.is_goal()).map(scorer_label).collect()
    };

    MatchScorers {
        home: side(m.details.home.events.as_slice()),
        away: side(m.details.away.events.as_slice()),
    }
}

/// Sorted by count descending, then player name ascending.
fn leaderboard(tally: HashMap<&str, u32>, limit: usize) -> Vec<PlayerTally> {
    let mut rows: Vec<PlayerTally> = tally
        .into_iter()
        .map(|(player, count)| PlayerTally { player: player.to_string(), count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.player.cmp(&b.player)));
    rows.truncate(limit);
    rows
}

fn tally_events<'a>(
    matches: &'a [Match],
    mut key: impl FnMut(&'a MatchEvent) -> Option<&'a str>,
) -> HashMap<&'a str, u32> {
    let mut tally = HashMap::new();
    for event in matches.iter().flat_map(|m| m.details.events()) {
        if let Some(player) = key(event) {
            *tally.entry(player).or_insert(0) += 1;
        }
    }
    tally
}

pub fn top_scorers(matches: &[Match], limit: usize) -> Vec<PlayerTally> {
    let goals = tally_events(matches, |e| e.is_goal().then_some(e.player.as_str()));
    leaderboard(goals, limit)
}

pub fn top_assists(matches: &[Match], limit: usize) -> Vec<PlayerTally> {
    let assists = tally_events(matches, |e| {
        if e.is_goal() {
            e.assist.as_deref()
        } else {
            None
        }
    });
    leaderboard(assists, limit)
}

pub fn card_stats(matches: &[Match]) -> CardStats {
    let yellow = tally_events(matches, |e| {
        (e.event_type == EventType::YellowCard).then_some(e.player.as_str())
    });
    let red = tally_events(matches, |e| {
        (e.event_type == EventType::RedCard).then_some(e.player.as_str())
    });

    CardStats {
        total_yellow_cards: yellow.values().sum(),
        total_red_cards: red.values().sum(),
        top_yellow_cards: leaderboard(yellow, DEFAULT_LEADERBOARD_SIZE),
        top_red_cards: leaderboard(red, DEFAULT_LEADERBOARD_SIZE),
    }
}

pub fn season_stats(matches: &[Match]) -> SeasonStats {
    let teams: HashSet<&str> = matches
        .iter()
        .flat_map(|m| [m.home.as_str(), m.away.as_str()])
        .collect();
    let venues: HashSet<&str> = matches.iter().map(|m| m.venue.name.as_str()).collect();

    SeasonStats {
        total_matches: matches.len(),
        total_teams: teams.len(),
        total_venues: venues.len(),
        top_scorers: top_scorers(matches, DEFAULT_LEADERBOARD_SIZE),
        top_assists: top_assists(matches, DEFAULT_LEADERBOARD_SIZE),
        cards: card_stats(matches),
    }
}
