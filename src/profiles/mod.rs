use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::aggregate::{AuthorProfile, FilterArgs, ParallelArgs, ProfileSet, WorkFilters};
use crate::input::load_all;
use crate::search::open_output;

#[derive(Args)]
pub struct ProfilesArgs {
    /// Works export (.json, .json.gz, or a directory of them)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSONL file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Skip profiles with fewer publications
    #[arg(short, long, default_value = "1")]
    pub min_articles: u64,

    #[command(flatten)]
    pub parallel: ParallelArgs,
}

/// Full profile dump record: the identity key, derived citation figures,
/// then every accumulated field.
#[derive(Debug, Serialize)]
pub struct ProfileRecord<'a> {
    pub key: &'a str,
    pub median_citations: u64,
    pub average_citations: f64,
    #[serde(flatten)]
    pub profile: &'a AuthorProfile,
}

impl<'a> ProfileRecord<'a> {
    pub fn new(key: &'a str, profile: &'a AuthorProfile) -> Self {
        Self {
            key,
            median_citations: profile.median_citations(),
            average_citations: profile.average_citations(),
            profile,
        }
    }
}

/// Writes one JSON line per profile in first-seen order; returns how many were written.
pub fn write_profiles<W: Write>(
    profiles: &ProfileSet,
    min_articles: u64,
    mut writer: W,
) -> Result<usize> {
    let mut written = 0;
    for (key, profile) in profiles.iter() {
        if profile.publication_count < min_articles {
            continue;
        }
        serde_json::to_writer(&mut writer, &ProfileRecord::new(key, profile))?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

pub fn run(args: ProfilesArgs) -> Result<()> {
    crate::init_logging();

    let works = load_all(&args.input)
        .with_context(|| format!("Failed to load works from {}", args.input.display()))?;
    info!("Loaded {} works", works.len());

    let filters = WorkFilters::from(&args.filters);
    let profiles = args.parallel.aggregate(&works, &filters);

    let writer = open_output(args.output.as_deref())?;
    let written = write_profiles(&profiles, args.min_articles, writer)?;
    info!(
        "Wrote {} of {} author profiles",
        written,
        profiles.len()
    );

    Ok(())
}
