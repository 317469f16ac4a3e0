use super::CamberStation;
use crate::algorithms::linspace;
use crate::errors::AirfoilError;
use ncollide2d::na::Point2;

// Thickness distribution polynomial coefficients for the NACA 4-digit family
const A0: f64 = 1.4845;
const A1: f64 = 0.6300;
const A2: f64 = 1.7580;
const A3: f64 = 1.4215;
const A4: f64 = 0.5075;

/// An AirfoilGenerator is an entity which can produce the height of the mean camber line, its
/// local slope, and the section thickness at fractions of the chord from 0.0 to 1.0. This
/// provides the information necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// The height of the mean camber line at a fraction of the chord
    fn camber(&self, xsi: f64) -> f64;

    /// The slope dy/dx of the mean camber line at a fraction of the chord
    fn camber_slope(&self, xsi: f64) -> f64;

    /// The full thickness of the section, measured across the camber line, at a fraction of
    /// the chord
    fn thickness(&self, xsi: f64) -> f64;

    /// The station at a fraction of the chord. The surface points sit half the thickness away
    /// from the camber point, perpendicular to the local camber line direction.
    fn station_at(&self, xsi: f64) -> CamberStation {
        let yc = self.camber(xsi);
        let theta = self.camber_slope(xsi).atan();
        let half = self.thickness(xsi) / 2.0;

        let upper = Point2::new(xsi - half * theta.sin(), yc + half * theta.cos());
        let lower = Point2::new(xsi + half * theta.sin(), yc - half * theta.cos());

        CamberStation::new(Point2::new(xsi, yc), upper, lower)
    }

    /// Generate the upper and lower surface points at `n_points` uniformly spaced fractions of
    /// the chord
    fn surface_points(&self, n_points: usize) -> (Vec<Point2<f64>>, Vec<Point2<f64>>) {
        linspace(0.0, 1.0, n_points)
            .iter()
            .map(|&x| {
                let station = self.station_at(x);
                (station.upper, station.lower)
            })
            .unzip()
    }
}

/// A generator for a NACA 4-digit airfoil. For a section of unit chord, the camber line is a
/// pair of quadratic arcs meeting at the position of maximum camber, and the thickness
/// distribution is the standard four-term polynomial with a square root leading term.
pub struct Naca4Digit {
    t: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the section as a fraction of the chord
    ///
    /// * `max_camber` - the maximum height of the camber line as a fraction of the chord
    ///
    /// * `max_camber_pos` - the chordwise position of the maximum camber as a fraction of the
    /// chord
    pub fn new(t_max: f64, max_camber: f64, max_camber_pos: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            m: max_camber,
            p: max_camber_pos,
        }
    }

    /// Parse a 4-digit identifier string such as "2412". The first digit is the chordwise
    /// position of the maximum camber in tenths of the chord, the second is the maximum camber
    /// in hundredths, and the last two are the maximum thickness in hundredths. Anything that
    /// is not exactly four ASCII digits is rejected.
    pub fn from_digits(digits: &str) -> Result<Naca4Digit, AirfoilError> {
        let bytes = digits.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(AirfoilError::NacaDefinition(digits.to_string()));
        }

        let value = |i: usize| (bytes[i] - b'0') as f64;
        Ok(Naca4Digit::new(
            (value(2) * 10.0 + value(3)) / 100.0,
            value(1) / 100.0,
            value(0) / 10.0,
        ))
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber(&self, xsi: f64) -> f64 {
        // The guard must test xsi < p first, which keeps the division by p^2 unreachable for
        // sections with the maximum camber at the leading edge
        if xsi < self.p {
            (self.m / self.p.powf(2.0)) * (2.0 * self.p * xsi - xsi.powf(2.0))
        } else {
            (self.m / (1.0 - self.p).powf(2.0))
                * (1.0 - 2.0 * self.p + 2.0 * self.p * xsi - xsi.powf(2.0))
        }
    }

    fn camber_slope(&self, xsi: f64) -> f64 {
        if xsi < self.p {
            (2.0 * self.m / self.p.powf(2.0)) * (self.p - xsi)
        } else {
            (2.0 * self.m / (1.0 - self.p).powf(2.0)) * (self.p - xsi)
        }
    }

    fn thickness(&self, xsi: f64) -> f64 {
        (2.0 * self.t)
            * (A0 * xsi.sqrt() - A1 * xsi - A2 * xsi.powf(2.0) + A3 * xsi.powf(3.0)
                - A4 * xsi.powf(4.0))
    }
}
