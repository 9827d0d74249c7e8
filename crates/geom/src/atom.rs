use std::{fmt::Display, str::FromStr};

use approx::AbsDiffEq;

use crate::Vec3;

/// A single atom record from an XYZ file: an element symbol and a Cartesian
/// position in Ångstrom.
#[derive(Debug, Clone)]
pub struct Atom {
    symbol: String,
    position: Vec3,
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl AbsDiffEq for Atom {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.symbol == other.symbol
            && self.position.abs_diff_eq(&other.position, epsilon)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(10);
        let width = f.width().unwrap_or(precision + 6);
        write!(
            f,
            "{:2} {:w$.p$} {:w$.p$} {:w$.p$}",
            self.symbol,
            self.position.x,
            self.position.y,
            self.position.z,
            w = width,
            p = precision,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomParseError {
    /// fewer than four whitespace-separated fields
    TooFewFields(usize),
    /// one of the coordinate fields is not a real number
    BadCoordinate,
}

impl Display for AtomParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomParseError::TooFewFields(n) => {
                write!(f, "expected at least 4 fields in atom record, found {n}")
            }
            AtomParseError::BadCoordinate => {
                write!(f, "failed to parse coordinate field as f64")
            }
        }
    }
}

impl std::error::Error for AtomParseError {}

impl FromStr for Atom {
    type Err = AtomParseError;

    /// parse an Atom from a line like
    ///  N 0.0 0.0 0.1
    /// any fields after the z coordinate are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(AtomParseError::TooFewFields(fields.len()));
        }
        let mut coord = [0.0; 3];
        for (c, field) in coord.iter_mut().zip(&fields[1..4]) {
            *c = field
                .parse()
                .map_err(|_| AtomParseError::BadCoordinate)?;
        }
        let [x, y, z] = coord;
        Ok(Self::new(fields[0], x, y, z))
    }
}

impl Atom {
    pub fn new(symbol: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            symbol: symbol.to_owned(),
            position: Vec3::new(x, y, z),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Euclidean distance between `self` and `other`
    pub fn distance(&self, other: &Atom) -> f64 {
        (other.position - self.position).norm()
    }

    /// the vector pointing from `self` to `other`
    pub fn vector_to(&self, other: &Atom) -> Vec3 {
        other.position - self.position
    }
}
