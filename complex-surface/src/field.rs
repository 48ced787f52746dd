use crate::grid::Grid;
use ndarray::{Array2, Zip};
use num_complex::Complex64;

/// |1 + z²|
pub fn unit_plus_square(z: Complex64) -> f64 {
    (Complex64::new(1.0, 0.0) + z * z).norm()
}

/// Magnitude field sampled on a `Grid`.
pub struct Field {
    values: Array2<f64>,
    min: f64,
    max: f64,
}

impl Field {
    pub fn evaluate(grid: &Grid) -> Self {
        let values = Zip::from(&grid.mesh_a)
            .and(&grid.mesh_b)
            .map_collect(|&a, &b| unit_plus_square(Complex64::new(a, b)));

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Field { values, min, max }
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field() -> Field {
        Field::evaluate(&Grid::new(-0.5..0.5, -1.5..1.5, 100))
    }

    #[test]
    fn corner_matches_scalar_formula() {
        // 1 + (-0.5 - 1.5i)² = 1 + (0.25 - 2.25 + 1.5i) = -1 + 1.5i
        let expected = (1.0_f64 + 1.5 * 1.5).sqrt();
        assert_relative_eq!(field().values()[[0, 0]], expected, epsilon = 1e-12);
        assert_relative_eq!(
            field().values()[[0, 0]],
            unit_plus_square(Complex64::new(-0.5, -1.5)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn shape_is_100_by_100() {
        assert_eq!(field().dim(), (100, 100));
    }

    #[test]
    fn values_are_non_negative() {
        let field = field();
        assert!(field.values().iter().all(|&v| v >= 0.0));
        assert!(field.min() >= 0.0);
    }

    #[test]
    fn extremes_bracket_every_value() {
        let field = field();
        assert!(field.min() < field.max());
        assert!(field
            .values()
            .iter()
            .all(|&v| v >= field.min() && v <= field.max()));
    }

    #[test]
    fn vanishes_near_i() {
        assert_relative_eq!(unit_plus_square(Complex64::new(0.0, 1.0)), 0.0, epsilon = 1e-12);
        assert_relative_eq!(unit_plus_square(Complex64::new(0.0, 0.0)), 1.0);
    }
}
