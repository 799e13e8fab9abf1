pub mod challenge;
pub mod replay;
pub mod score;
pub mod validate;

use circleforge::error::CfResult;
use circleforge::geometry::SurfaceDimensions;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,
}

impl SurfaceArgs {
    pub fn dimensions(&self) -> CfResult<SurfaceDimensions> {
        SurfaceDimensions::new(self.width, self.height)
    }
}
