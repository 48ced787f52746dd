use ndarray::{Array1, Array2};
use std::ops::Range;

/// Sample mesh over a rectangle of the complex plane.
///
/// Rows walk the imaginary axis `b`, columns walk the real axis `a`, so
/// `mesh_a[[i, j]] == a[j]` and `mesh_b[[i, j]] == b[i]`.
pub struct Grid {
    pub a: Array1<f64>,      // Real axis samples
    pub b: Array1<f64>,      // Imaginary axis samples
    pub mesh_a: Array2<f64>, // Real part at every mesh point
    pub mesh_b: Array2<f64>, // Imaginary part at every mesh point
}

impl Grid {
    pub fn new(a_range: Range<f64>, b_range: Range<f64>, samples: usize) -> Self {
        // Endpoints inclusive on both axes
        let a = Array1::linspace(a_range.start, a_range.end, samples);
        let b = Array1::linspace(b_range.start, b_range.end, samples);

        let shape = (b.len(), a.len());
        let mesh_a = Array2::from_shape_fn(shape, |(_, j)| a[j]);
        let mesh_b = Array2::from_shape_fn(shape, |(i, _)| b[i]);

        Grid {
            a,
            b,
            mesh_a,
            mesh_b,
        }
    }

    pub fn a_coord(&self, j: usize) -> f64 {
        self.a[j]
    }

    pub fn b_coord(&self, i: usize) -> f64 {
        self.b[i]
    }

    /// (rows, cols) of the mesh
    pub fn dim(&self) -> (usize, usize) {
        self.mesh_a.dim()
    }

    pub fn point(&self, i: usize, j: usize) -> (f64, f64) {
        (self.mesh_a[[i, j]], self.mesh_b[[i, j]])
    }

    pub fn a_extent(&self) -> Range<f64> {
        self.a_coord(0)..self.a_coord(self.a.len() - 1)
    }

    pub fn b_extent(&self) -> Range<f64> {
        self.b_coord(0)..self.b_coord(self.b.len() - 1)
    }
}
