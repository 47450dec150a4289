use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Label -> count table that remembers the order labels were first seen.
///
/// `most_common` breaks ties by that order, so results are reproducible
/// regardless of hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    pub fn add(&mut self, label: &str, count: u64) {
        match self.index.get(label) {
            Some(&idx) => self.entries[idx].1 += count,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), count));
            }
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.index
            .get(label)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// The `n` highest counts, descending; equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        // stable sort keeps insertion order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Folds `other` into this table. Labels new to `self` are appended in
    /// `other`'s order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (label, count) in other.iter() {
            self.add(label, count);
        }
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
