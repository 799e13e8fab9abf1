use circleforge::config::Config;
use circleforge::error::CfResult;
use circleforge::feedback::challenge_text;
use circleforge::session::BestScore;
use circleforge::storage::{BestScoreStore, JsonFileStore};
use clap::Args;
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ChallengeArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: ChallengeArgs, store_path: &Path) -> CfResult<()> {
    let params = &args.config.session;
    let store = JsonFileStore::with_key(store_path, &params.best_score_key);
    let best = match store.load() {
        Ok(v) => BestScore::new(v),
        Err(e) => {
            warn!("Could not read best score: {}", e);
            BestScore::unset()
        }
    };

    println!(
        "{}",
        challenge_text(best.value(), params.display_decimals, &params.challenge_url)
    );
    Ok(())
}
