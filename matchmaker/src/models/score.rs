use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;

use super::UserId;
use crate::error::Result;

/// Similarity of `source` towards `target`, already rounded.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoreEntry {
    pub source: UserId,
    pub target: UserId,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(source: UserId, target: UserId, score: f64) -> Self {
        Self {
            source,
            target,
            score,
        }
    }

    /// Key used in the rendered matrix, e.g. `"userA -> userB"`.
    pub fn pair_key(&self) -> String {
        format!("{} -> {}", self.source, self.target)
    }
}

/// Directed score entries in the order they were produced.
///
/// Serializes as a JSON object mapping `"A -> B"` to the score, keeping
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMatrix {
    entries: Vec<ScoreEntry>,
}

impl ScoreMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both directions of an unordered pair with one shared score.
    pub fn insert_pair(&mut self, a: &UserId, b: &UserId, score: f64) {
        self.entries.push(ScoreEntry::new(a.clone(), b.clone(), score));
        self.entries.push(ScoreEntry::new(b.clone(), a.clone(), score));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn get(&self, source: &str, target: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.source.as_str() == source && e.target.as_str() == target)
            .map(|e| e.score)
    }

    /// Entries whose source is `user`, best match first.
    ///
    /// Equal scores are ordered by target id.
    pub fn matches_for(&self, user: &str) -> Vec<ScoreEntry> {
        let mut matches: Vec<ScoreEntry> = self
            .entries
            .iter()
            .filter(|e| e.source.as_str() == user)
            .cloned()
            .collect();

        matches.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => a.target.cmp(&b.target),
            other => other,
        });
        matches
    }

    /// Drop entries scoring below `min_score`. Both directions of a pair
    /// share a score, so the result stays symmetric.
    pub fn filter_min_score(self, min_score: f64) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|e| e.score >= min_score)
                .collect(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ScoreMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.pair_key(), &entry.score)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a ScoreMatrix {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
