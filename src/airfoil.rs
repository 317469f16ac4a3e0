use crate::algorithms::linspace;
use crate::errors::AirfoilError;
use crate::geometry::distances2::{dist, mid_point};
use crate::geometry::spline::CubicSpline;
use crate::serialize::{point_seq, Point2f64};
use itertools::izip;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod generate;
pub mod morph;

use generate::{AirfoilGenerator, Naca4Digit};

/// Spline knots closer than this in x are merged before interpolating a surface
pub const KNOT_MERGE_TOL: f64 = 1e-9;

/// Step used for the central difference when differentiating the camber line
pub const CAMBER_SLOPE_STEP: f64 = 1e-6;

/// Camber line angles with a magnitude beyond this many degrees are treated as interpolation
/// noise near the leading edge and reported as zero
pub const CAMBER_ANGLE_LIMIT_DEG: f64 = 50.0;

/// A single chordwise station of an airfoil, with the camber point and the corresponding points
/// on the upper and lower surfaces.
#[derive(Serialize)]
pub struct CamberStation {
    #[serde(with = "Point2f64")]
    pub camber: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }

    /// The full section thickness at this station, measured from the lower to the upper point
    pub fn thickness(&self) -> f64 {
        dist(&self.upper, &self.lower)
    }
}

/// A 2D airfoil section held as separate upper and lower surfaces, each an ordered run of
/// points from the leading edge to the trailing edge. Construction reorders surfaces that
/// arrive trailing-edge-first and rescales the section to a unit chord; after that the entity
/// is immutable and every query derives its result from the stored points on demand.
#[derive(Debug, Clone, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "point_seq")]
    upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "point_seq")]
    lower: Vec<Point2<f64>>,

    norm_factor: f64,
}

fn order_chordwise(points: &mut [Point2<f64>]) {
    if points[0].x > points.last().unwrap().x {
        points.reverse();
    }
}

fn camber_at(upper: &CubicSpline, lower: &CubicSpline, xsi: f64) -> f64 {
    (upper.evaluate(xsi) + lower.evaluate(xsi)) / 2.0
}

fn camber_angle_at(upper: &CubicSpline, lower: &CubicSpline, xsi: f64) -> f64 {
    let fwd = camber_at(upper, lower, xsi + CAMBER_SLOPE_STEP);
    let back = camber_at(upper, lower, xsi - CAMBER_SLOPE_STEP);
    let theta = ((fwd - back) / (2.0 * CAMBER_SLOPE_STEP)).atan().to_degrees();

    if theta.abs() > CAMBER_ANGLE_LIMIT_DEG {
        0.0
    } else {
        theta
    }
}

impl Airfoil {
    /// Create an airfoil from its upper and lower surface points. The points are copied, each
    /// surface is independently reversed if it runs from the trailing edge to the leading edge,
    /// and the whole section is scaled by the chordwise extent of the upper surface so that the
    /// upper surface spans [0, 1] in x.
    ///
    /// The lower surface is scaled by the upper surface's extent; if the two extents differ,
    /// the lower surface will not span exactly [0, 1].
    pub fn from_points(
        upper: &[Point2<f64>],
        lower: &[Point2<f64>],
    ) -> Result<Airfoil, AirfoilError> {
        let mut upper = upper.to_vec();
        let mut lower = lower.to_vec();

        if upper.len() < 2 || lower.len() < 2 {
            return Err(AirfoilError::NotEnoughPoints);
        }

        order_chordwise(&mut upper);
        order_chordwise(&mut lower);

        let norm_factor = (upper.last().unwrap().x - upper[0].x).abs();
        if norm_factor == 0.0 {
            return Err(AirfoilError::DegenerateChord);
        }

        // Both coordinates are divided by the same factor, preserving the aspect ratio
        for p in upper.iter_mut().chain(lower.iter_mut()) {
            *p /= norm_factor;
        }

        // Each surface must be able to build its interpolating spline, so that the queries on a
        // constructed airfoil cannot fail
        CubicSpline::from_points(&upper, KNOT_MERGE_TOL)?;
        CubicSpline::from_points(&lower, KNOT_MERGE_TOL)?;

        Ok(Airfoil {
            upper,
            lower,
            norm_factor,
        })
    }

    /// Create an airfoil from a NACA 4-digit series identifier such as "2412" or "0012",
    /// sampled at `n_points` stations along the chord.
    pub fn naca4(digits: &str, n_points: usize) -> Result<Airfoil, AirfoilError> {
        let generator = Naca4Digit::from_digits(digits)?;
        let (upper, lower) = generator.surface_points(n_points);
        Airfoil::from_points(&upper, &lower)
    }

    /// Create an airfoil by linearly blending the surfaces of two existing airfoils, where
    /// `eta = 0` reproduces `first` and `eta = 1` reproduces `second`. Both airfoils are
    /// resampled on a common grid of `n_points` uniform chordwise stations before blending.
    pub fn morph_between(
        first: &Airfoil,
        second: &Airfoil,
        eta: f64,
        n_points: usize,
    ) -> Result<Airfoil, AirfoilError> {
        if !(0.0..=1.0).contains(&eta) {
            return Err(AirfoilError::EtaOutOfRange(eta));
        }

        let xsi = linspace(0.0, 1.0, n_points);
        let (upper_first, lower_first) = first.interpolate_y_many(&xsi);
        let (upper_second, lower_second) = second.interpolate_y_many(&xsi);

        let upper: Vec<Point2<f64>> = izip!(&xsi, &upper_first, &upper_second)
            .map(|(x, y1, y2)| Point2::new(*x, y1 * (1.0 - eta) + y2 * eta))
            .collect();
        let lower: Vec<Point2<f64>> = izip!(&xsi, &lower_first, &lower_second)
            .map(|(x, y1, y2)| Point2::new(*x, y1 * (1.0 - eta) + y2 * eta))
            .collect();

        Airfoil::from_points(&upper, &lower)
    }

    pub fn upper(&self) -> &[Point2<f64>] {
        &self.upper
    }

    pub fn lower(&self) -> &[Point2<f64>] {
        &self.lower
    }

    /// The chordwise extent of the original upper surface data, by which the section was scaled
    pub fn norm_factor(&self) -> f64 {
        self.norm_factor
    }

    /// All surface points as a single sequence, the upper surface followed by the lower, with
    /// no deduplication of shared leading or trailing edge points
    pub fn all_points(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        result.extend_from_slice(&self.lower);
        result
    }

    /// A single traversal around the section, running down the upper surface from the trailing
    /// edge to the leading edge and then back along the lower surface
    pub fn outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        result.reverse();
        result.extend_from_slice(&self.lower);
        result
    }

    fn surface_splines(&self) -> (CubicSpline, CubicSpline) {
        // Both surfaces were validated at construction, so the builds cannot fail here
        let upper = CubicSpline::from_points(&self.upper, KNOT_MERGE_TOL).unwrap();
        let lower = CubicSpline::from_points(&self.lower, KNOT_MERGE_TOL).unwrap();
        (upper, lower)
    }

    /// Interpolated y values of the upper and lower surfaces at the given chordwise position,
    /// each surface interpolated independently on its own x sampling with a cubic spline.
    /// Positions outside the sampled range are extrapolated with the same cubic model.
    pub fn interpolate_y(&self, xsi: f64) -> (f64, f64) {
        let (upper, lower) = self.surface_splines();
        (upper.evaluate(xsi), lower.evaluate(xsi))
    }

    /// As `interpolate_y`, evaluated over a whole sequence of chordwise positions
    pub fn interpolate_y_many(&self, xsi: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let (upper, lower) = self.surface_splines();
        (
            xsi.iter().map(|&x| upper.evaluate(x)).collect(),
            xsi.iter().map(|&x| lower.evaluate(x)).collect(),
        )
    }

    /// The y coordinate of the camber line, the mean of the two interpolated surfaces
    pub fn camber_line(&self, xsi: f64) -> f64 {
        let (upper, lower) = self.surface_splines();
        camber_at(&upper, &lower, xsi)
    }

    /// As `camber_line`, evaluated over a whole sequence of chordwise positions
    pub fn camber_line_many(&self, xsi: &[f64]) -> Vec<f64> {
        let (upper, lower) = self.surface_splines();
        xsi.iter().map(|&x| camber_at(&upper, &lower, x)).collect()
    }

    /// The local slope angle of the camber line in degrees, estimated with a central difference
    /// of step `CAMBER_SLOPE_STEP`. Magnitudes beyond `CAMBER_ANGLE_LIMIT_DEG` are reported as
    /// zero.
    pub fn camber_line_angle(&self, xsi: f64) -> f64 {
        let (upper, lower) = self.surface_splines();
        camber_angle_at(&upper, &lower, xsi)
    }

    /// As `camber_line_angle`, evaluated over a whole sequence of chordwise positions
    pub fn camber_line_angles(&self, xsi: &[f64]) -> Vec<f64> {
        let (upper, lower) = self.surface_splines();
        xsi.iter()
            .map(|&x| camber_angle_at(&upper, &lower, x))
            .collect()
    }

    /// The interpolated station at the given chordwise position, with the camber point midway
    /// between the two surface points
    pub fn station_at(&self, xsi: f64) -> CamberStation {
        let (y_upper, y_lower) = self.interpolate_y(xsi);
        let upper = Point2::new(xsi, y_upper);
        let lower = Point2::new(xsi, y_lower);
        CamberStation::new(mid_point(&upper, &lower), upper, lower)
    }
}
