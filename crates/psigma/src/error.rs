use std::fmt::Display;

use geom::{FormatError, LoadError};

/// Everything that can stop a P_sigma calculation. None of these are fatal to
/// an interactive session; each one just ends the current file.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// the input file is missing or unreadable
    NotFound(String),

    /// the input file violates the XYZ atom-count contract
    Format(FormatError),

    /// no atom of the requested element is present
    CentralNotFound(String),

    /// fewer than three atoms are bonded to the central atom
    InsufficientNeighbors { symbol: String, found: usize },

    /// fewer than three bond angles are available
    InsufficientAngles(usize),

    /// the bond vector to the neighbor with this geometry index has zero length
    GeometricDegeneracy { index: usize },

    /// the bond angles sum to more than 2π, so P_sigma is not real
    RadicandNegative { sum: f64 },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => {
                write!(f, "the file {path} cannot be located or read")
            }
            Error::Format(e) => {
                write!(f, "this .xyz file is improperly formatted: {e}")
            }
            Error::CentralNotFound(sym) => {
                write!(f, "no {sym} atom found in the geometry")
            }
            Error::InsufficientNeighbors { symbol, found } => write!(
                f,
                "found {found} atoms bonded to {symbol}, at least 3 are needed"
            ),
            Error::InsufficientAngles(n) => {
                write!(f, "found {n} bond angles, at least 3 are needed")
            }
            Error::GeometricDegeneracy { index } => write!(
                f,
                "atom {} coincides with the central atom",
                index + 1
            ),
            Error::RadicandNegative { sum } => write!(
                f,
                "bond angle sum of {sum:.6} rad exceeds 2π, P_sigma is undefined"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::NotFound(path) => Self::NotFound(path),
            LoadError::Format(e) => Self::Format(e),
        }
    }
}
