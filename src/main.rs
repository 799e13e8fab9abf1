use circleforge::config::{Config, ScoringWeights};
use circleforge::scorer::Scorer;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "data/best_score.json")]
    store: PathBuf,

    #[arg(global = true, long)]
    weights: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a recorded stroke file
    Score(cmd::score::ScoreArgs),
    /// Replay a CSV event log through a drawing session
    Replay(cmd::replay::ReplayArgs),
    /// Audit the scorer against the reference shapes
    Validate(cmd::validate::ValidateArgs),
    /// Print the challenge text for the stored best score
    Challenge(cmd::challenge::ChallengeArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Score(args) => &args.config,
            Commands::Replay(args) => &args.config,
            Commands::Validate(args) => &args.config,
            Commands::Challenge(args) => &args.config,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Commands::Score(_) => "score",
            Commands::Replay(_) => "replay",
            Commands::Validate(_) => "validate",
            Commands::Challenge(_) => "challenge",
        }
    }
}

/// File weights (if any) are the base; flags typed on the command line win.
fn resolve_weights(cli: &Cli, matches: &ArgMatches) -> ScoringWeights {
    let cli_weights = &cli.command.config().weights;
    let Some(path) = &cli.weights else {
        return cli_weights.clone();
    };

    info!("⚖️  Loading Weights from: {}", path.display());
    match ScoringWeights::load_from_file(path) {
        Ok(mut file_weights) => {
            if let Some(sub_matches) = matches.subcommand_matches(cli.command.name()) {
                file_weights.merge_from_cli(cli_weights, sub_matches);
            }
            file_weights
        }
        Err(e) => {
            error!("❌ Failed to load weights '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("⭕ Initializing CircleForge...");

    let weights = resolve_weights(&cli, &matches);
    if cli.weights.is_none() {
        info!("No external weights loaded. Using CLI values and defaults.");
    }

    let scorer = match Scorer::new(weights) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Replay(args) => cmd::replay::run(args, scorer, &cli.store),
        Commands::Validate(args) => cmd::validate::run(args, &scorer),
        Commands::Challenge(args) => cmd::challenge::run(args, &cli.store),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
