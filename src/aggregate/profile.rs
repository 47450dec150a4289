use serde::Serialize;
use std::collections::HashMap;

use super::FrequencyTable;

/// Everything accumulated for one normalized author identity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthorProfile {
    /// First raw name seen for this identity, kept verbatim
    pub display_name: String,
    pub publication_count: u64,
    /// Citation count of each qualifying work, in encounter order
    pub citation_samples: Vec<u64>,
    pub topic_counts: FrequencyTable,
    pub coauthor_counts: FrequencyTable,
    pub journal_counts: FrequencyTable,
    pub country_counts: FrequencyTable,
    pub orcid: Option<String>,
    pub openalex_id: Option<String>,
}

impl AuthorProfile {
    /// Lower median: element `n / 2` of the ascending samples, 0 when empty.
    pub fn median_citations(&self) -> u64 {
        let mut sorted = self.citation_samples.clone();
        sorted.sort_unstable();
        sorted.get(sorted.len() / 2).copied().unwrap_or(0)
    }

    /// Mean citations rounded to one decimal place (half-to-even on the
    /// exact binary value), 0 when empty.
    pub fn average_citations(&self) -> f64 {
        if self.citation_samples.is_empty() {
            return 0.0;
        }
        let total: u64 = self.citation_samples.iter().sum();
        let mean = total as f64 / self.citation_samples.len() as f64;
        // `{:.1}` rounds the exact value with ties to even
        format!("{mean:.1}").parse().unwrap_or(mean)
    }

    /// Most frequent affiliation country code, ties going to the first seen.
    pub fn dominant_country(&self) -> Option<&str> {
        self.country_counts
            .most_common(1)
            .first()
            .map(|(code, _)| *code)
    }

    /// Folds a later partial profile for the same identity into this one.
    pub(crate) fn merge(&mut self, other: AuthorProfile) {
        if self.display_name.is_empty() {
            self.display_name = other.display_name;
        }
        self.publication_count += other.publication_count;
        self.citation_samples.extend(other.citation_samples);
        self.topic_counts.merge(&other.topic_counts);
        self.coauthor_counts.merge(&other.coauthor_counts);
        self.journal_counts.merge(&other.journal_counts);
        self.country_counts.merge(&other.country_counts);
        if self.orcid.is_none() {
            self.orcid = other.orcid;
        }
        if self.openalex_id.is_none() {
            self.openalex_id = other.openalex_id;
        }
    }
}

/// Profiles keyed by normalized name, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    index: HashMap<String, usize>,
    entries: Vec<(String, AuthorProfile)>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile for `key`, created empty on first use.
    pub(crate) fn entry(&mut self, key: String) -> &mut AuthorProfile {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.clone(), idx);
                self.entries.push((key, AuthorProfile::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &str) -> Option<&AuthorProfile> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorProfile)> {
        self.entries
            .iter()
            .map(|(key, profile)| (key.as_str(), profile))
    }

    /// Appends `other`, which must come from works later in the input than
    /// everything already in `self`.
    pub(crate) fn merge(&mut self, other: ProfileSet) {
        for (key, profile) in other.entries {
            match self.index.get(&key) {
                Some(&idx) => self.entries[idx].1.merge(profile),
                None => {
                    self.index.insert(key.clone(), self.entries.len());
                    self.entries.push((key, profile));
                }
            }
        }
    }
}

impl IntoIterator for ProfileSet {
    type Item = (String, AuthorProfile);
    type IntoIter = std::vec::IntoIter<(String, AuthorProfile)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
