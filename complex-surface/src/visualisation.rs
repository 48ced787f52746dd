use crate::config::SurfaceConfig;
use crate::field::Field;
use crate::grid::Grid;
use crate::png;
use crate::theme::Theme;
use anyhow::{anyhow, ensure, Context, Result};
use log::{debug, info};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const TITLE: &str = "f(z) = |1 + z²|";

pub struct SurfaceRenderer {
    output_dir: PathBuf,
    width: u32,
    height: u32,
    stride: usize,
}

impl SurfaceRenderer {
    pub fn new(output_dir: impl AsRef<Path>, config: &SurfaceConfig) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        let (width, height) = config.pixel_size();

        Ok(Self {
            output_dir,
            width,
            height,
            stride: config.stride,
        })
    }

    pub fn output_path(&self, theme: Theme) -> PathBuf {
        self.output_dir.join(theme.file_name())
    }

    /// Parse `mode` as a theme name, then render. Nothing is written for an
    /// unknown name.
    pub fn render_named(&self, grid: &Grid, field: &Field, mode: &str) -> Result<PathBuf> {
        let theme: Theme = mode.parse()?;
        self.render(grid, field, theme)
    }

    /// Draw the surface under `theme` and write `z2.<theme>.png`.
    pub fn render(&self, grid: &Grid, field: &Field, theme: Theme) -> Result<PathBuf> {
        ensure!(
            grid.dim() == field.dim(),
            "Field shape {:?} does not match grid shape {:?}",
            field.dim(),
            grid.dim()
        );

        let path = self.output_path(theme);
        let mut rgb = vec![0u8; self.width as usize * self.height as usize * 3];

        // Backend borrows the pixel buffer; dropped before the buffer is encoded
        self.draw(&mut rgb, grid, field, theme)
            .map_err(|e| anyhow!("Failed to draw {} surface: {}", theme, e))?;

        let bg = theme.background();
        let rgba = png::key_out_rgb8(&rgb, [bg.0, bg.1, bg.2]);
        png::write_png_rgba8(&path, &rgba, self.width, self.height)?;

        info!("Saved render: {}", path.display());
        Ok(path)
    }

    fn draw(
        &self,
        buffer: &mut [u8],
        grid: &Grid,
        field: &Field,
        theme: Theme,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        let bg = theme.background();
        let fg = theme.foreground();
        root.fill(&bg)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 28).into_font().color(&fg))
            .margin(20)
            .build_cartesian_3d(grid.a_extent(), field.min()..field.max(), grid.b_extent())?;

        chart.with_projection(|mut pb| {
            pb.yaw = 0.6;
            pb.pitch = 0.4;
            pb.scale = 0.85;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(fg.mix(0.1))
            .bold_grid_style(fg.mix(0.25))
            .axis_panel_style(fg.mix(0.04))
            .x_formatter(&|_: &f64| String::new())
            .y_formatter(&|_: &f64| String::new())
            .z_formatter(&|_: &f64| String::new())
            .draw()?;

        let quads = self.surface_quads(grid, field);
        debug!("Drawing {} surface patches ({} theme)", quads.len(), theme);

        let gradient = theme.surface_gradient();
        let span = field.max() - field.min();
        chart.draw_series(quads.into_iter().map(|(corners, height)| {
            let t = if span > 0.0 {
                ((height - field.min()) / span).clamp(0.0, 1.0)
            } else {
                0.5
            };
            let [r, g, b, _] = gradient.at(t as f32).to_rgba8();
            Polygon::new(corners.to_vec(), RGBColor(r, g, b).filled())
        }))?;

        root.present()?;
        Ok(())
    }

    /// One patch per strided cell: (a, |f|, b) corners and mean height.
    fn surface_quads(&self, grid: &Grid, field: &Field) -> Vec<([(f64, f64, f64); 4], f64)> {
        let (rows, cols) = grid.dim();
        let values = field.values();
        let vertex = |i: usize, j: usize| {
            let (a, b) = grid.point(i, j);
            (a, values[[i, j]], b)
        };

        let mut quads = Vec::new();
        for i in (0..rows - 1).step_by(self.stride) {
            let i2 = (i + self.stride).min(rows - 1);
            for j in (0..cols - 1).step_by(self.stride) {
                let j2 = (j + self.stride).min(cols - 1);
                let corners = [vertex(i, j), vertex(i, j2), vertex(i2, j2), vertex(i2, j)];
                let height = corners.iter().map(|c| c.1).sum::<f64>() / 4.0;
                quads.push((corners, height));
            }
        }
        quads
    }
}
