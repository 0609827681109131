//! Tournament CLI
//!
//! Build rosters, run a knockout tournament and report the results.

mod commentary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commentary::Commentator;
use cricket_core::RatingPredictor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tournament::{Bracket, NamePool, RosterBuilder, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Knockout cricket tournament simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a tournament
    Run(RunArgs),
    /// Print the report for a saved tournament
    Report {
        /// Results file written by `run --output`
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// TOML config file; command-line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of teams (2-12)
    #[arg(short, long)]
    teams: Option<usize>,

    /// Overs per innings (2-20)
    #[arg(short, long)]
    overs: Option<u32>,

    /// Seed for a reproducible tournament
    #[arg(long)]
    seed: Option<u64>,

    /// Newline-separated player names
    #[arg(long)]
    player_names: Option<PathBuf>,

    /// Newline-separated team names
    #[arg(long)]
    team_names: Option<PathBuf>,

    /// Write results as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only print innings and match summaries
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(args: &RunArgs) -> Result<TournamentConfig> {
    let mut config = match &args.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TournamentConfig::default(),
    };
    if let Some(teams) = args.teams {
        config.team_count = teams;
    }
    if let Some(overs) = args.overs {
        config.total_overs = overs;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid tournament configuration")?;
    Ok(config)
}

fn load_pool(path: Option<&PathBuf>, default: fn() -> NamePool) -> Result<NamePool> {
    match path {
        Some(path) => {
            NamePool::load(path).with_context(|| format!("loading names from {}", path.display()))
        }
        None => Ok(default()),
    }
}

fn run_tournament(args: RunArgs) -> Result<()> {
    let config = load_config(&args)?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let builder = RosterBuilder::new(
        load_pool(args.player_names.as_ref(), NamePool::default_players)?,
        load_pool(args.team_names.as_ref(), NamePool::default_teams)?,
        config.players_per_team,
    );
    let teams = builder
        .build(config.team_count, &mut rng)
        .context("building rosters")?;
    let participants = teams.iter().map(|t| t.name().to_string()).collect();

    let bracket = Bracket::new(teams, config.match_config()?)?;
    let mut commentator = Commentator::new(args.quiet);
    let outcome = bracket.run(&mut RatingPredictor::new(), &mut rng, &mut commentator);

    let results = TournamentResults::new(
        config,
        participants,
        outcome.rounds,
        outcome.champion.name(),
    );
    results.print_report();

    if let Some(path) = &args.output {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn show_report(path: PathBuf) -> Result<()> {
    let results = TournamentResults::load(&path)
        .with_context(|| format!("loading results from {}", path.display()))?;
    results.print_report();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_tournament(args),
        Command::Report { path } => show_report(path),
    }
}
