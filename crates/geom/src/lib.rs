use approx::AbsDiffEq;
use std::fmt::Display;

pub use atom::*;
pub use bonds::*;
pub use radii::RadiusTable;
pub use xyz::{FormatError, LoadError};

pub mod atom;
pub mod bonds;
pub mod radii;
pub mod xyz;

use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;

/// build a [Geometry] from lines of `symbol x y z`, mostly for tests
#[macro_export]
macro_rules! geometry {
    ($($sym:ident $x:literal $y:literal $z:literal)*) => {
	$crate::Geometry::new(vec![
	    $($crate::Atom::new(stringify!($sym), $x, $y, $z),)*
	    ])
    };
}


/// An ordered list of atoms, in the order they appeared in the source file,
/// along with the free-text comment line of that file.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub atoms: Vec<Atom>,
    pub comment: String,
}

impl Geometry {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            comment: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    /// the symbols of each atom in file order
    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.symbol()).collect()
    }
}

impl std::ops::Index<usize> for Geometry {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

/// Two geometries are equal if they contain the same atoms in the same order.
/// The comment line is not compared.
impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
    }
}

impl AbsDiffEq for Geometry {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.atoms.len() == other.atoms.len()
            && self
                .atoms
                .iter()
                .zip(&other.atoms)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

/// write `self` in XYZ format: the atom count, the comment line, and one line
/// per atom. The precision of the coordinates can be set with the usual format
/// syntax and defaults to 10 decimal places.
impl Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(10);
        let width = f.width().unwrap_or(precision + 6);
        writeln!(f, "{}", self.atoms.len())?;
        writeln!(f, "{}", self.comment)?;
        for atom in &self.atoms {
            writeln!(f, "{atom:w$.p$}", w = width, p = precision)?;
        }
        Ok(())
    }
}
