use clap::Args;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::geography::country_name;
use crate::normalize::normalize_author_name;
use crate::{WorkRecord, UNKNOWN};

mod counter;
mod profile;
pub use counter::FrequencyTable;
pub use profile::{AuthorProfile, ProfileSet};

/// Work filter flags shared by the `search` and `profiles` commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep works whose primary topic contains this text (case-insensitive)
    #[arg(long)]
    pub topic: Option<String>,

    /// Keep works whose journal name contains this text (case-insensitive)
    #[arg(long)]
    pub journal: Option<String>,

    /// Keep works with an author affiliated to a matching country name or code
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ParallelArgs {
    /// Number of threads (0 = auto, 1 = single pass on the current thread)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Works per parallel aggregation chunk
    #[arg(long, default_value = "5000")]
    pub chunk_size: usize,
}

impl Default for ParallelArgs {
    fn default() -> Self {
        Self {
            threads: 1,
            chunk_size: 5000,
        }
    }
}

impl ParallelArgs {
    /// Runs the aggregation pass, on the rayon pool unless one thread was requested.
    pub fn aggregate(&self, works: &[WorkRecord], filters: &WorkFilters) -> ProfileSet {
        if self.threads == 1 {
            return aggregate(works, filters);
        }

        let num_threads = if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        };
        match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            Ok(()) => info!("Using {} threads", num_threads),
            Err(_) => debug!(
                "Global thread pool already built, using {} threads",
                rayon::current_num_threads()
            ),
        }

        aggregate_parallel(works, filters, self.chunk_size)
    }
}

/// Work-level filters. Each one is a lowercase substring; an absent filter
/// accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkFilters {
    topic: Option<String>,
    journal: Option<String>,
    country: Option<String>,
}

fn prepare_filter(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

impl WorkFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic = prepare_filter(topic);
        self
    }

    pub fn with_journal(mut self, journal: &str) -> Self {
        self.journal = prepare_filter(journal);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = prepare_filter(country);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.journal.is_none() && self.country.is_none()
    }

    /// Whether a work qualifies as a whole. Rejected works contribute nothing.
    pub fn matches(&self, work: &WorkRecord) -> bool {
        if let Some(topic) = &self.topic {
            if !work.topic_name().to_lowercase().contains(topic.as_str()) {
                return false;
            }
        }

        if let Some(journal) = &self.journal {
            if !work.venue_name().to_lowercase().contains(journal.as_str()) {
                return false;
            }
        }

        if let Some(country) = &self.country {
            let has_country = work
                .authorships
                .iter()
                .flat_map(|authorship| authorship.country_codes())
                .any(|code| country_matches(code, country));
            if !has_country {
                return false;
            }
        }

        true
    }
}

impl From<&FilterArgs> for WorkFilters {
    fn from(args: &FilterArgs) -> Self {
        let mut filters = WorkFilters::new();
        if let Some(topic) = &args.topic {
            filters = filters.with_topic(topic);
        }
        if let Some(journal) = &args.journal {
            filters = filters.with_journal(journal);
        }
        if let Some(country) = &args.country {
            filters = filters.with_country(country);
        }
        filters
    }
}

/// Matches on the full country name or on the raw code.
fn country_matches(code: &str, filter: &str) -> bool {
    country_name(code).to_lowercase().contains(filter) || code.to_lowercase().contains(filter)
}

/// Adds one qualifying work to the profiles of all its named authors.
fn accumulate_work(profiles: &mut ProfileSet, work: &WorkRecord) {
    let citations = work.cited_by_count;
    let journal = work.venue_name();
    let topic = work.topic_name();

    for authorship in &work.authorships {
        let author_name = match authorship.author_name() {
            Some(name) if !name.is_empty() && name != UNKNOWN => name,
            _ => continue,
        };

        let profile = profiles.entry(normalize_author_name(author_name));

        if profile.display_name.is_empty() {
            profile.display_name = author_name.to_string();
        }

        profile.publication_count += 1;
        profile.citation_samples.push(citations);

        if profile.orcid.is_none() {
            profile.orcid = non_empty(authorship.author.orcid.as_deref());
        }
        if profile.openalex_id.is_none() {
            profile.openalex_id = non_empty(authorship.author.id.as_deref());
        }

        if topic != UNKNOWN {
            profile.topic_counts.increment(topic);
        }

        // Raw names, and repeated names in one work each count
        for other in &work.authorships {
            if let Some(other_name) = other.author_name() {
                if !other_name.is_empty() && other_name != author_name {
                    profile.coauthor_counts.increment(other_name);
                }
            }
        }

        if journal != UNKNOWN {
            profile.journal_counts.increment(journal);
        }

        for code in authorship.country_codes() {
            profile.country_counts.increment(code);
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

/// Returns the profiles and the number of works the filters rejected.
fn fold_works(works: &[WorkRecord], filters: &WorkFilters) -> (ProfileSet, usize) {
    let mut profiles = ProfileSet::new();
    let mut skipped = 0;

    for work in works {
        if !filters.matches(work) {
            skipped += 1;
            continue;
        }
        accumulate_work(&mut profiles, work);
    }

    (profiles, skipped)
}

/// Single pass over `works`, building one profile per normalized author name.
pub fn aggregate(works: &[WorkRecord], filters: &WorkFilters) -> ProfileSet {
    let (profiles, skipped) = fold_works(works, filters);
    debug!(
        works = works.len(),
        skipped,
        profiles = profiles.len(),
        "Aggregated author profiles"
    );
    profiles
}

/// Same result as [`aggregate`], computed over contiguous chunks in parallel.
///
/// Partial profile sets are merged in chunk order, so display names,
/// identifiers, sample order and tie-breaking all match the sequential pass.
pub fn aggregate_parallel(
    works: &[WorkRecord],
    filters: &WorkFilters,
    chunk_size: usize,
) -> ProfileSet {
    let partials: Vec<(ProfileSet, usize)> = works
        .par_chunks(chunk_size.max(1))
        .map(|chunk| fold_works(chunk, filters))
        .collect();

    let chunks = partials.len();
    let mut profiles = ProfileSet::new();
    let mut skipped = 0;
    for (partial, partial_skipped) in partials {
        profiles.merge(partial);
        skipped += partial_skipped;
    }

    debug!(
        works = works.len(),
        chunks,
        skipped,
        profiles = profiles.len(),
        "Aggregated author profiles in parallel"
    );
    profiles
}
