use clap::{Parser, Subcommand};
use skyblock_scorer::{
    config::Settings,
    leaderboard::LeaderboardRegistry,
    models::ScoreError,
    scoring::ScoreCalculator,
    sources::{JsonFileSource, SnapshotSource},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "skyblock-scorer")]
#[clap(about = "Turn Skyblock player statistics into levels, weights and leaderboards", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Level and weight for one category of a player
    Calc {
        /// Category name or alias (e.g. mining, cata, healer)
        category: String,

        /// Player whose snapshot to load
        player: String,

        /// Show the player's data as if they were at this level instead
        #[clap(short, long)]
        level: Option<u32>,
    },

    /// Combined weight over every weighted category
    Weight {
        /// Player whose snapshot to load
        player: String,
    },

    /// Rank the guild on a leaderboard category
    Rank {
        /// Leaderboard category (defaults to the configured one)
        category: Option<String>,

        /// Number of rows to show
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// List every category and its aliases
    Categories,
}

fn main() -> anyhow::Result<()> {
    let loaded = Settings::new();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = &loaded {
        warn!("Using default settings: {}", e);
    }

    let cli = Cli::parse();

    let calculator = ScoreCalculator::with_builtin_categories()?;
    let leaderboards = LeaderboardRegistry::builtin()?;
    settings.validate(&leaderboards)?;

    let source = JsonFileSource::new(&settings.data.snapshot_dir);

    match run(cli.command, &settings, &calculator, &leaderboards, &source) {
        // unknown names and missing formulas are reported as plain messages
        Err(e) if e.is_user_facing() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        result => Ok(result?),
    }
}

fn run(
    command: Commands,
    settings: &Settings,
    calculator: &ScoreCalculator,
    leaderboards: &LeaderboardRegistry,
    source: &JsonFileSource,
) -> Result<(), ScoreError> {
    match command {
        Commands::Calc { category, player, level } => {
            info!("Calculating {} for {}", category, player);

            let result = match level {
                Some(level) => {
                    let snapshot = source.fetch_snapshot(&player)?;
                    let (_, result) = calculator.simulate_level(&category, &snapshot, level)?;
                    result
                }
                None => calculator.calculate_for_player(source, &player, &category)?,
            };

            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Weight { player } => {
            let snapshot = source.fetch_snapshot(&player)?;
            let weight = calculator.total_weight(&snapshot)?;

            println!("{}", serde_json::to_string_pretty(&weight)?);
        }

        Commands::Rank { category, limit } => {
            let category = category.unwrap_or_else(|| settings.leaderboard.default_category.clone());
            let limit = limit.unwrap_or(settings.leaderboard.max_entries);

            let players = source.fetch_guild_players()?;
            let leaderboard = leaderboards.leaderboard(&category, players, limit)?;

            println!("{}", serde_json::to_string_pretty(&leaderboard)?);
        }

        Commands::Categories => {
            println!("Stat categories:");
            for category in calculator.registry().categories() {
                let weighted = if category.weight_formula().is_some() { "" } else { " (no weight)" };
                println!(
                    "  {:<14} {:<13} {}{}",
                    category.name,
                    category.family.as_str(),
                    category.aliases.join(", "),
                    weighted
                );
            }

            println!("Leaderboard categories:");
            for category in leaderboards.categories() {
                println!("  {:<17} {}", category.name, category.aliases.join(", "));
            }
        }
    }

    Ok(())
}
