use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use pl_models::{Match, MatchPatch, NewMatch, Result, StatsError};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredMatch {
    seq: u64,
    record: Match,
}

#[derive(Debug, Default)]
struct Store {
    matches: HashMap<String, StoredMatch>,
    next_seq: u64,
}

/// In-memory owner of every match record.
///
/// Each operation takes the lock once, so concurrent callers see either the
/// state before or after a write, never a partial one. Keys keep the sequence
/// number of their first insertion, which breaks ties between equal dates.
#[derive(Debug, Default)]
pub struct MatchRepository {
    store: RwLock<Store>,
}

impl Store {
    fn put(&mut self, record: Match) -> Option<Match> {
        if let Some(existing) = self.matches.get_mut(&record.id) {
            return Some(std::mem::replace(&mut existing.record, record));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.matches.insert(record.id.clone(), StoredMatch { seq, record });
        None
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Match> {
        self.matches
            .get_mut(id)
            .map(|stored| &mut stored.record)
            .ok_or_else(|| StatsError::not_found(id))
    }

    fn fresh_id(&self) -> String {
        let base = format!("match_{}", Utc::now().timestamp_millis());
        if !self.matches.contains_key(&base) {
            return base;
        }

        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.matches.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Ascending by date; unparseable dates sort after every valid one.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl MatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: impl IntoIterator<Item = Match>) -> Self {
        let repository = Self::new();
        repository.put_all(matches);
        repository
    }

    /// Insert or overwrite by id.
    pub fn put(&self, record: Match) {
        if let Some(previous) = self.store.write().put(record) {
            debug!("Overwrote match {}", previous.id);
        }
    }

    /// Bulk load under a single lock. Returns how many records replaced an existing id.
    pub fn put_all(&self, records: impl IntoIterator<Item = Match>) -> usize {
        let mut store = self.store.write();
        let mut overwritten = 0;
        for record in records {
            if let Some(previous) = store.put(record) {
                debug!("Duplicate match id {} on bulk load, keeping the last one", previous.id);
                overwritten += 1;
            }
        }
        overwritten
    }

    pub fn get(&self, id: &str) -> Result<Match> {
        self.store
            .read()
            .matches
            .get(id)
            .map(|stored| stored.record.clone())
            .ok_or_else(|| StatsError::not_found(id))
    }

    pub fn update(&self, id: &str, patch: MatchPatch) -> Result<Match> {
        let mut store = self.store.write();
        let record = store.get_mut(id)?;
        patch.apply(record);
        Ok(record.clone())
    }

    pub fn toggle_favorite(&self, id: &str) -> Result<Match> {
        let mut store = self.store.write();
        let record = store.get_mut(id)?;
        record.is_favorite = !record.is_favorite;
        Ok(record.clone())
    }

    pub fn delete(&self, id: &str) -> Result<Match> {
        self.store
            .write()
            .matches
            .remove(id)
            .map(|stored| stored.record)
            .ok_or_else(|| StatsError::not_found(id))
    }

    /// Inserts under a fresh time-based id (`match_{unix_millis}`).
    pub fn create(&self, new_match: NewMatch) -> Match {
        let mut store = self.store.write();
        let record = new_match.into_match(store.fresh_id());
        store.put(record.clone());
        record
    }

    /// Every record, ascending by date, ties in insertion order.
    pub fn all(&self) -> Vec<Match> {
        let store = self.store.read();
        let mut entries: Vec<&StoredMatch> = store.matches.values().collect();
        entries.sort_by(|a, b| {
            compare_dates(a.record.kickoff_date(), b.record.kickoff_date())
                .then(a.seq.cmp(&b.seq))
        });
        entries.into_iter().map(|stored| stored.record.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.store.read().matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
