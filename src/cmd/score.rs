use crate::reports;
use circleforge::api::evaluate_stroke;
use circleforge::config::Config;
use circleforge::error::CfResult;
use circleforge::feedback::FeedbackTable;
use circleforge::geometry::StrokeFile;
use circleforge::scorer::Scorer;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Stroke JSON file: { "width", "height", "points": [{ "x", "y" }] }
    pub stroke: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> CfResult<()> {
    info!("📂 Loading Stroke: {}", args.stroke.display());
    let stroke = StrokeFile::load_from_file(&args.stroke)?;

    let result = evaluate_stroke(scorer, &FeedbackTable::default(), &stroke)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let name = args
            .stroke
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| args.stroke.display().to_string());
        reports::print_evaluation(&name, &result, args.config.session.display_decimals);
    }
    Ok(())
}
