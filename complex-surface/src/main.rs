mod config;
mod field;
mod grid;
mod png;
mod theme;
mod visualisation;

use anyhow::Result;
use config::SurfaceConfig;
use field::Field;
use grid::Grid;
use log::info;
use theme::Theme;
use visualisation::SurfaceRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SurfaceConfig::default();
    config.validate()?;

    // Grid and field are built once and shared by both renders
    let grid = Grid::new(config.a_range.clone(), config.b_range.clone(), config.samples);
    let field = Field::evaluate(&grid);
    let (rows, cols) = grid.dim();
    info!(
        "Evaluated |1 + z²| on {}x{} grid (range {:.4}..{:.4})",
        rows,
        cols,
        field.min(),
        field.max()
    );

    let renderer = SurfaceRenderer::new(".", &config)?;
    for theme in Theme::ALL {
        renderer.render(&grid, &field, theme)?;
    }

    Ok(())
}
