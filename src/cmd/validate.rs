use super::SurfaceArgs;
use crate::reports;
use circleforge::config::Config;
use circleforge::error::CfResult;
use circleforge::scorer::Scorer;
use circleforge::shapes::get_all_shapes;
use clap::Args;
use rayon::prelude::*;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub surface: SurfaceArgs,

    #[arg(long)]
    pub shape: Option<String>,

    #[arg(long, default_value_t = 200)]
    pub samples: usize,

    #[arg(short = 'S', long, default_value_t = 42)]
    pub seed: u64,
}

pub fn run(args: ValidateArgs, scorer: &Scorer) -> CfResult<()> {
    let surface = args.surface.dimensions()?;
    let center = surface.center();
    let shapes = get_all_shapes(surface, args.samples, args.seed);

    println!("\n🔎 === SHAPE AUDIT === 🔎");
    let filtered: Vec<_> = shapes
        .into_iter()
        .filter(|(shape, _)| match &args.shape {
            Some(filter) => shape
                .to_string()
                .to_lowercase()
                .contains(&filter.to_lowercase()),
            None => true,
        })
        .collect();

    let mut results: Vec<_> = filtered
        .par_iter()
        .map(|(shape, points)| {
            (
                shape.to_string(),
                scorer.score_details(points, center),
                scorer.check_closure(points, center),
            )
        })
        .collect();

    // Best first
    results.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

    reports::print_audit_report(
        &results,
        &scorer.weights,
        args.config.session.display_decimals,
    );
    Ok(())
}
