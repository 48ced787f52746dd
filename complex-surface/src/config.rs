use anyhow::{anyhow, Result};
use std::ops::Range;

/// Compiled-in plot constants
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub a_range: Range<f64>,  // Real axis extent (inclusive endpoints)
    pub b_range: Range<f64>,  // Imaginary axis extent (inclusive endpoints)
    pub samples: usize,       // Samples per axis
    pub stride: usize,        // Grid lines skipped between drawn surface lines
    pub figure_inches: (f64, f64),
    pub dpi: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            a_range: -0.5..0.5,
            b_range: -1.5..1.5,
            samples: 100,
            stride: 2,
            figure_inches: (7.0, 6.0),
            dpi: 100.0,
        }
    }
}

impl SurfaceConfig {
    /// Validate all parameters
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [("a_range", &self.a_range), ("b_range", &self.b_range)] {
            if !(range.start < range.end) {
                return Err(anyhow!(
                    "{} must be increasing (start={}, end={})",
                    name,
                    range.start,
                    range.end
                ));
            }
        }
        if self.samples < 2 {
            return Err(anyhow!("samples must be at least 2, got {}", self.samples));
        }
        if self.stride == 0 || self.stride >= self.samples {
            return Err(anyhow!(
                "stride must be in [1, {}), got {}",
                self.samples,
                self.stride
            ));
        }
        let (w, h) = self.figure_inches;
        if w <= 0.0 || h <= 0.0 {
            return Err(anyhow!(
                "Figure size must be positive (width={}, height={})",
                w,
                h
            ));
        }
        if self.dpi <= 0.0 {
            return Err(anyhow!("dpi must be positive, got {}", self.dpi));
        }
        Ok(())
    }

    /// Canvas size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_inches;
        (
            (w * self.dpi).round() as u32,
            (h * self.dpi).round() as u32,
        )
    }
}
