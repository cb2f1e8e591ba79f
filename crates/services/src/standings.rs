use pl_models::{Match, StandingRow};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Points desc, goal difference desc, goals for desc, then club name asc.
fn table_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.pts
        .cmp(&a.pts)
        .then_with(|| b.db.cmp(&a.db))
        .then_with(|| b.bp.cmp(&a.bp))
        .then_with(|| a.club.cmp(&b.club))
}

/// League table built from the final score of every match.
pub fn standings(matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: HashMap<&str, StandingRow> = HashMap::new();

    for m in matches {
        rows.entry(m.home.as_str())
            .or_insert_with(|| StandingRow::new(m.home.as_str()))
            .record(m.goals_home, m.goals_away);
        rows.entry(m.away.as_str())
            .or_insert_with(|| StandingRow::new(m.away.as_str()))
            .record(m.goals_away, m.goals_home);
    }

    let mut table: Vec<StandingRow> = rows.into_values().collect();
    table.sort_by(table_order);
    for (index, row) in table.iter_mut().enumerate() {
        row.position = index + 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_models::{MatchDetails, MatchResult, Venue};
    use proptest::prelude::*;

    fn result(home: &str, away: &str, goals_home: u32, goals_away: u32) -> Match {
        Match {
            id: format!("{home}-{away}"),
            date: "2025-03-01".to_string(),
            time: "15:00".to_string(),
            day: "Sat".to_string(),
            home: home.to_string(),
            away: away.to_string(),
            home_logo: String::new(),
            away_logo: String::new(),
            goals_home,
            goals_away,
            attendance: String::new(),
            venue: Venue::new("Ground", 52.0, -1.0, "Town"),
            referee: String::new(),
            is_favorite: false,
            details: MatchDetails::default(),
        }
    }

    #[test]
    fn test_points_and_positions() {
        let table = standings(&[
            result("Arsenal", "Chelsea", 2, 0),
            result("Chelsea", "Liverpool", 1, 1),
            result("Liverpool", "Arsenal", 3, 1),
        ]);

        let clubs: Vec<&str> = table.iter().map(|r| r.club.as_str()).collect();
        assert_eq!(clubs, vec!["Liverpool", "Arsenal", "Chelsea"]);

        let liverpool = &table[0];
        assert_eq!(liverpool.position, 1);
        assert_eq!((liverpool.mj, liverpool.g, liverpool.n, liverpool.p), (2, 1, 1, 0));
        assert_eq!((liverpool.bp, liverpool.bc, liverpool.db, liverpool.pts), (4, 2, 2, 4));

        let chelsea = &table[2];
        assert_eq!(chelsea.position, 3);
        assert_eq!((chelsea.db, chelsea.pts), (-2, 1));
    }

    #[test]
    fn test_goals_for_breaks_equal_difference() {
        let table = standings(&[
            result("Brentford", "Fulham", 3, 2),
            result("Everton", "Wolves", 1, 0),
        ]);

        assert_eq!(table[0].club, "Brentford");
        assert_eq!(table[1].club, "Everton");
    }

    #[test]
    fn test_name_breaks_exact_ties() {
        let table = standings(&[result("Wolves", "Burnley", 0, 0)]);

        assert_eq!(table[0].club, "Burnley");
        assert_eq!(table[1].club, "Wolves");
        assert_eq!(table[1].position, 2);
    }

    #[test]
    fn test_empty_table() {
        assert!(standings(&[]).is_empty());
    }

    const CLUBS: [&str; 6] = ["Arsenal", "Chelsea", "Everton", "Fulham", "Liverpool", "Wolves"];

    fn arb_match() -> impl Strategy<Value = Match> {
        (0..CLUBS.len(), 1..CLUBS.len(), 0u32..6, 0u32..6).prop_map(|(h, offset, gh, ga)| {
            let a = (h + offset) % CLUBS.len();
            result(CLUBS[h], CLUBS[a], gh, ga)
        })
    }

    proptest! {
        #[test]
        fn prop_table_invariants(matches in proptest::collection::vec(arb_match(), 0..40)) {
            let table = standings(&matches);

            let played: u32 = table.iter().map(|r| r.mj).sum();
            prop_assert_eq!(played as usize, 2 * matches.len());

            let decisive = matches.iter().filter(|m| m.result() != MatchResult::Draw).count();
            let points: u32 = table.iter().map(|r| r.pts).sum();
            prop_assert!(points as usize >= 3 * decisive);

            for (index, row) in table.iter().enumerate() {
                prop_assert_eq!(row.position, index + 1);
                prop_assert_eq!(row.db, i64::from(row.bp) - i64::from(row.bc));
                prop_assert_eq!(row.mj, row.g + row.n + row.p);
            }

            if let Some(top) = table.first() {
                for other in &table {
                    prop_assert!(other.pts <= top.pts);
                    prop_assert!(!(other.pts == top.pts && other.db > top.db));
                }
            }
        }
    }
}
