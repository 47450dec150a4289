use anyhow::Result;
use clap::{Parser, Subcommand};
use openalex_authors::{profiles, search};

#[derive(Parser)]
#[command(name = "openalex-authors")]
#[command(about = "Aggregate OpenAlex works exports into ranked author profiles")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, rank and export author profiles
    Search(search::SearchArgs),
    /// Dump every aggregated author profile as JSON Lines
    Profiles(profiles::ProfilesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Search(args) => search::run(args),
        Commands::Profiles(args) => profiles::run(args),
    }
}
