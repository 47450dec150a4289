use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AuthorProfile, FrequencyTable, ProfileSet};
use crate::geography::{continent, country_name};

mod summary;
pub use summary::Summary;

/// Entries kept in the topic, co-author and journal columns
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Count,
    AverageCitations,
    MedianCitations,
    /// Score, then publication count
    Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    pub min_articles: u64,
    author_filter: Option<String>,
    pub sort_key: SortKey,
    pub max_results: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_articles: 3,
            author_filter: None,
            sort_key: SortKey::Count,
            max_results: 50,
        }
    }
}

impl RankOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_articles(mut self, min_articles: u64) -> Self {
        self.min_articles = min_articles;
        self
    }

    /// Partial, case-insensitive author name match. Empty means no filter.
    pub fn with_author_filter(mut self, author: &str) -> Self {
        self.author_filter = if author.is_empty() {
            None
        } else {
            Some(author.to_lowercase())
        };
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn author_filter(&self) -> Option<&str> {
        self.author_filter.as_deref()
    }
}

/// One output row, with the column names used for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Median Citations")]
    pub median_citations: u64,
    #[serde(rename = "Average Citations")]
    pub average_citations: f64,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Top Topics")]
    pub top_topics: String,
    #[serde(rename = "Top Co-authors")]
    pub top_coauthors: String,
    #[serde(rename = "Top Journals")]
    pub top_journals: String,
    #[serde(rename = "ORCID")]
    pub orcid: String,
    #[serde(rename = "OpenAlex ID")]
    pub openalex_id: String,
    #[serde(rename = "Score")]
    pub score: u8,
}

impl ResultRow {
    pub const HEADERS: [&'static str; 12] = [
        "Author",
        "Count",
        "Median Citations",
        "Average Citations",
        "Country",
        "Continent",
        "Top Topics",
        "Top Co-authors",
        "Top Journals",
        "ORCID",
        "OpenAlex ID",
        "Score",
    ];

    pub fn from_profile(profile: &AuthorProfile) -> Self {
        let median_citations = profile.median_citations();
        // no recorded country -> empty name, "Unknown" continent
        let country_code = profile.dominant_country().unwrap_or("");

        Self {
            author: profile.display_name.clone(),
            count: profile.publication_count,
            median_citations,
            average_citations: profile.average_citations(),
            country: country_name(country_code).to_string(),
            continent: continent(country_code).to_string(),
            top_topics: top_labels(&profile.topic_counts),
            top_coauthors: top_labels(&profile.coauthor_counts),
            top_journals: top_labels(&profile.journal_counts),
            orcid: profile.orcid.clone().unwrap_or_default(),
            openalex_id: profile.openalex_id.clone().unwrap_or_default(),
            score: score(
                profile.publication_count,
                median_citations,
                profile.orcid.is_some(),
            ),
        }
    }
}

fn top_labels(table: &FrequencyTable) -> String {
    table
        .most_common(TOP_N)
        .into_iter()
        .map(|(label, _)| label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 0-3 heuristic: one point each for 10+ publications, a median of 5+
/// citations, and a known ORCID.
pub fn score(publication_count: u64, median_citations: u64, has_orcid: bool) -> u8 {
    u8::from(publication_count >= 10) + u8::from(median_citations >= 5) + u8::from(has_orcid)
}

/// Sorts descending by `key`. Stable, so equal keys keep profile order.
pub fn sort_rows(rows: &mut [ResultRow], key: SortKey) {
    match key {
        SortKey::Count => rows.sort_by(|a, b| b.count.cmp(&a.count)),
        SortKey::AverageCitations => {
            rows.sort_by(|a, b| b.average_citations.total_cmp(&a.average_citations))
        }
        SortKey::MedianCitations => {
            rows.sort_by(|a, b| b.median_citations.cmp(&a.median_citations))
        }
        SortKey::Score => rows.sort_by(|a, b| (b.score, b.count).cmp(&(a.score, a.count))),
    }
}

fn matches_author(key: &str, profile: &AuthorProfile, filter: &str) -> bool {
    key.to_lowercase().contains(filter) || profile.display_name.to_lowercase().contains(filter)
}

/// Turns aggregated profiles into sorted result rows.
///
/// Every qualifying profile is ranked before the list is cut to
/// `max_results`, so any limit yields a prefix of the full ranking.
pub fn rank(profiles: &ProfileSet, options: &RankOptions) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = profiles
        .iter()
        .filter(|(_, profile)| profile.publication_count >= options.min_articles)
        .filter(|(key, profile)| match options.author_filter() {
            Some(filter) => matches_author(key, profile, filter),
            None => true,
        })
        .map(|(_, profile)| ResultRow::from_profile(profile))
        .collect();

    sort_rows(&mut rows, options.sort_key);
    rows.truncate(options.max_results);
    rows
}
