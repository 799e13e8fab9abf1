use super::SurfaceArgs;
use crate::reports;
use circleforge::api::ReplaySummary;
use circleforge::config::Config;
use circleforge::error::CfResult;
use circleforge::input::load_event_log;
use circleforge::scorer::Scorer;
use circleforge::session::{FinalResult, Session, Signal};
use circleforge::storage::JsonFileStore;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub surface: SurfaceArgs,

    /// CSV event log with header `source,kind,x,y`
    pub events: PathBuf,
}

pub fn run(args: ReplayArgs, scorer: Scorer, store_path: &Path) -> CfResult<()> {
    let params = args.config.session.clone();
    let decimals = params.display_decimals;

    info!("📂 Loading Events: {}", args.events.display());
    let events = load_event_log(&args.events)?;
    info!("    {} events", events.len());

    let store = JsonFileStore::with_key(store_path, &params.best_score_key);
    let mut session = Session::new(scorer, params, args.surface.dimensions()?, store);
    let best_before = session.best().value();

    let mut signals = Vec::with_capacity(events.len());
    for event in events {
        let Some(signal) = session.handle(event) else {
            continue;
        };
        match &signal {
            Signal::Live(score) => debug!("live {:.*}%", decimals, score),
            Signal::Final(FinalResult::Unclosed(c)) => println!(
                "❌ Make it a closed circle! (gap {:.*} > {:.*})",
                decimals, c.gap, decimals, c.threshold
            ),
            Signal::Final(FinalResult::Scored {
                score,
                is_new_best,
                feedback,
                ..
            }) => {
                let marker = if *is_new_best { "🎉" } else { "⭕" };
                println!(
                    "{} {:.*}% - {}",
                    marker,
                    decimals,
                    score,
                    feedback.message()
                );
            }
            Signal::Resized(dims) => debug!("surface now {}x{}", dims.width, dims.height),
            Signal::Started | Signal::Cleared => {}
        }
        signals.push(signal);
    }

    let summary = ReplaySummary::from_signals(&signals);
    reports::print_replay_report(&summary, best_before, session.best().value(), decimals);
    Ok(())
}
