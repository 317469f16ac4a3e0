use super::Airfoil;
use crate::errors::AirfoilError;

/// A wrapper holding two airfoils and a common resampling resolution, producing the morphed
/// section at any blend position between them. The endpoint airfoils are borrowed, not copied;
/// the wrapper keeps no other state between calls.
pub struct MorphAirfoil<'a> {
    first: &'a Airfoil,
    second: &'a Airfoil,
    n_points: usize,
}

impl<'a> MorphAirfoil<'a> {
    pub fn new(first: &'a Airfoil, second: &'a Airfoil, n_points: usize) -> MorphAirfoil<'a> {
        MorphAirfoil {
            first,
            second,
            n_points,
        }
    }

    /// The morphed airfoil at the given blend position, where `eta = 0` reproduces the first
    /// airfoil and `eta = 1` the second
    pub fn at_eta(&self, eta: f64) -> Result<Airfoil, AirfoilError> {
        Airfoil::morph_between(self.first, self.second, eta, self.n_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::linspace;
    use approx::assert_relative_eq;

    #[test]
    fn test_at_eta_endpoint_reproduces_first() {
        let first = Airfoil::naca4("4412", 80).unwrap();
        let second = Airfoil::naca4("0012", 80).unwrap();
        let morph = MorphAirfoil::new(&first, &second, 60);

        let result = morph.at_eta(0.0).unwrap();
        let xsi = linspace(0.0, 1.0, 60);
        let (upper_e, lower_e) = first.interpolate_y_many(&xsi);

        for (i, p) in result.upper().iter().enumerate() {
            assert_relative_eq!(upper_e[i], p.y, epsilon = 1e-10);
        }
        for (i, p) in result.lower().iter().enumerate() {
            assert_relative_eq!(lower_e[i], p.y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_at_eta_rejects_out_of_range_positions() {
        let first = Airfoil::naca4("4412", 80).unwrap();
        let second = Airfoil::naca4("0012", 80).unwrap();
        let morph = MorphAirfoil::new(&first, &second, 60);

        assert!(matches!(
            morph.at_eta(-0.1),
            Err(AirfoilError::EtaOutOfRange(_))
        ));
        assert!(matches!(
            morph.at_eta(1.2),
            Err(AirfoilError::EtaOutOfRange(_))
        ));
    }
}
