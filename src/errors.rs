use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ways in which building an airfoil from caller supplied data can fail. All validation
/// happens at construction; queries on a successfully built airfoil do not fail.
#[derive(Debug)]
pub enum AirfoilError {
    /// A surface carries fewer than two distinct chordwise samples
    NotEnoughPoints,

    /// The upper surface has zero chordwise extent, so no normalization factor exists
    DegenerateChord,

    /// A morph blend position outside of the closed range [0, 1]
    EtaOutOfRange(f64),

    /// An identifier string which is not a valid NACA 4-digit definition
    NacaDefinition(String),
}

impl Display for AirfoilError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AirfoilError::NotEnoughPoints => {
                write!(f, "a surface needs at least two distinct chordwise samples")
            }
            AirfoilError::DegenerateChord => {
                write!(f, "upper surface has zero chordwise extent, cannot normalize")
            }
            AirfoilError::EtaOutOfRange(eta) => {
                write!(f, "'eta' must be in range [0, 1], given eta is {:.3}", eta)
            }
            AirfoilError::NacaDefinition(digits) => {
                write!(
                    f,
                    "'{}' not recognized as a valid NACA 4 digit definition",
                    digits
                )
            }
        }
    }
}

impl Error for AirfoilError {}
