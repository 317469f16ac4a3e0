use crate::algorithms::preceding_index_search;
use crate::errors::AirfoilError;
use ncollide2d::na::Point2;

/// A natural cubic spline through a set of knots, treating y as a function of x. The knots are
/// sorted by x at construction, so the input points do not need to be monotonic; airfoil surface
/// samples frequently run backwards in x near the nose where the curvature is high.
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    d2: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline from a set of 2D points. The points are copied, sorted by x, and knots
    /// whose x values lie within `tol` of the preceding knot are merged, keeping the first.
    /// Fails with `NotEnoughPoints` when fewer than two knots remain.
    pub fn from_points(points: &[Point2<f64>], tol: f64) -> Result<CubicSpline, AirfoilError> {
        let mut pts = points.to_vec();
        pts.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        pts.dedup_by(|a, b| (a.x - b.x).abs() <= tol);

        if pts.len() < 2 {
            return Err(AirfoilError::NotEnoughPoints);
        }

        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();

        // Second derivatives at the knots come from the tridiagonal system, solved with a
        // forward sweep and back substitution. Natural end conditions keep both ends at zero.
        let n = xs.len();
        let mut d2 = vec![0.0; n];
        let mut u = vec![0.0; n];

        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * d2[i - 1] + 2.0;
            d2[i] = (sig - 1.0) / p;

            let fwd = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
            let back = (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * (fwd - back) / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        for i in (1..n - 1).rev() {
            d2[i] = d2[i] * d2[i + 1] + u[i];
        }

        Ok(CubicSpline { xs, ys, d2 })
    }

    /// Evaluate the spline at the given x. Values outside the knot range are extrapolated with
    /// the cubic of the nearest boundary interval rather than clamped.
    pub fn evaluate(&self, x: f64) -> f64 {
        let lo = preceding_index_search(&self.xs, x).min(self.xs.len() - 2);
        let hi = lo + 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.d2[lo] + (b * b * b - b) * self.d2[hi]) * h * h / 6.0
    }

    pub fn knot_count(&self) -> usize {
        self.xs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn sample_points(p: &[(f64, f64)]) -> Vec<Point2<f64>> {
        p.iter().map(|(a, b)| Point2::new(*a, *b)).collect()
    }

    #[test]
    fn test_passes_through_knots() {
        let points = sample_points(&[(0.0, 0.0), (0.1, 0.3), (0.5, 0.2), (1.0, 0.0)]);
        let spline = CubicSpline::from_points(&points, 1e-9).unwrap();

        for p in points.iter() {
            assert_relative_eq!(p.y, spline.evaluate(p.x), epsilon = 1e-10);
        }
    }

    #[test_case(0.125)]
    #[test_case(0.75)]
    #[test_case(-0.5)]
    #[test_case(1.5)]
    fn test_line_reproduced_everywhere(x: f64) {
        // Collinear knots solve to zero curvature, so the spline is the line itself both inside
        // and outside the knot range
        let points = sample_points(&[(0.0, -1.0), (0.25, -0.5), (0.5, 0.0), (1.0, 1.0)]);
        let spline = CubicSpline::from_points(&points, 1e-9).unwrap();

        assert_relative_eq!(2.0 * x - 1.0, spline.evaluate(x), epsilon = 1e-10);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let ordered = sample_points(&[(0.0, 0.0), (0.2, 0.25), (0.6, 0.3), (1.0, 0.1)]);
        let shuffled = sample_points(&[(0.6, 0.3), (0.0, 0.0), (1.0, 0.1), (0.2, 0.25)]);

        let s0 = CubicSpline::from_points(&ordered, 1e-9).unwrap();
        let s1 = CubicSpline::from_points(&shuffled, 1e-9).unwrap();

        for x in [0.05, 0.3, 0.55, 0.9] {
            assert_relative_eq!(s0.evaluate(x), s1.evaluate(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cohabiting_knots_are_merged() {
        let points = sample_points(&[(0.0, 0.0), (0.0, 9.0), (1.0, 1.0)]);
        let spline = CubicSpline::from_points(&points, 1e-9).unwrap();

        assert_eq!(2, spline.knot_count());
        assert_relative_eq!(0.5, spline.evaluate(0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_knots() {
        let single = sample_points(&[(0.5, 0.1)]);
        assert!(matches!(
            CubicSpline::from_points(&single, 1e-9),
            Err(AirfoilError::NotEnoughPoints)
        ));

        let collapsed = sample_points(&[(0.5, 0.1), (0.5, -0.1)]);
        assert!(matches!(
            CubicSpline::from_points(&collapsed, 1e-9),
            Err(AirfoilError::NotEnoughPoints)
        ));
    }
}
