use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::aggregate::{FilterArgs, ParallelArgs, WorkFilters};
use crate::input::load_all;
use crate::rank::{rank, RankOptions, ResultRow, SortKey, Summary};

mod export;
pub use export::{open_output, write_csv, write_jsonl, write_rows, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Works export (.json, .json.gz, or a directory of them)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Keep authors whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Minimum number of publications
    #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u64).range(1..=100))]
    pub min_articles: u64,

    /// Maximum number of authors to output
    #[arg(short = 'n', long, default_value = "50", value_parser = clap::value_parser!(u64).range(1..=500))]
    pub max_results: u64,

    /// Ranking order
    #[arg(short, long, value_enum, default_value = "count")]
    pub sort: SortKey,

    #[command(flatten)]
    pub parallel: ParallelArgs,
}

/// Loads, aggregates and ranks without writing anything.
pub fn search(args: &SearchArgs) -> Result<Vec<ResultRow>> {
    let works = load_all(&args.input)
        .with_context(|| format!("Failed to load works from {}", args.input.display()))?;
    info!("Loaded {} works", works.len());

    let filters = WorkFilters::from(&args.filters);
    let profiles = args.parallel.aggregate(&works, &filters);
    info!("Built {} author profiles", profiles.len());

    let mut options = RankOptions::new()
        .with_min_articles(args.min_articles)
        .with_sort_key(args.sort)
        .with_max_results(args.max_results as usize);
    if let Some(author) = &args.author {
        options = options.with_author_filter(author);
    }

    Ok(rank(&profiles, &options))
}

pub fn run(args: SearchArgs) -> Result<()> {
    crate::init_logging();

    let rows = search(&args)?;
    if rows.is_empty() {
        warn!("No authors match the search criteria");
    } else {
        info!("Found {} matching authors", rows.len());
        info!("{}", Summary::from_rows(&rows));
    }

    write_rows(&rows, args.format, args.output.as_deref())?;
    if let Some(output) = &args.output {
        info!("Output: {}", output.display());
    }

    Ok(())
}
