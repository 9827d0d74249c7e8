//! Locating the central atom and the atoms bonded to it

use log::trace;

use crate::{Atom, Geometry, RadiusTable};

/// slack in Å added to the sum of two covalent radii
pub const BOND_TOLERANCE: f64 = 0.4;

/// distance in Å below which two atoms are considered to sit on top of each
/// other
pub const COINCIDENCE: f64 = 1e-8;

/// The distance cutoffs used by [bonded_neighbors]. Two atoms `a` and `b` are
/// bonded if `coincidence < d(a, b) <= r(a) + r(b) + tolerance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BondCriteria {
    pub tolerance: f64,
    pub coincidence: f64,
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self {
            tolerance: BOND_TOLERANCE,
            coincidence: COINCIDENCE,
        }
    }
}

/// the atom around which bonds and angles are measured, along with its index
/// in the geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Central<'a> {
    pub index: usize,
    pub atom: &'a Atom,
}

/// an atom bonded to a [Central] atom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<'a> {
    pub index: usize,
    pub atom: &'a Atom,
    /// distance to the central atom in Å
    pub distance: f64,
}

/// return the first atom in `geom` whose symbol is exactly `symbol`
pub fn find_central<'a>(
    geom: &'a Geometry,
    symbol: &str,
) -> Option<Central<'a>> {
    geom.iter()
        .enumerate()
        .find(|(_, a)| a.symbol() == symbol)
        .map(|(index, atom)| Central { index, atom })
}

/// return the atoms of `geom` bonded to `central` according to `criteria`, in
/// the order they appear in `geom`. `central` itself is skipped by index, and
/// any other atom coincident with it is never considered bonded.
pub fn bonded_neighbors<'a>(
    central: &Central<'_>,
    geom: &'a Geometry,
    radii: &RadiusTable,
    criteria: &BondCriteria,
) -> Vec<Neighbor<'a>> {
    let r1 = radii.radius(central.atom.symbol());
    geom.iter()
        .enumerate()
        .filter(|&(i, _)| i != central.index)
        .filter_map(|(index, atom)| {
            let distance = central.atom.distance(atom);
            let cutoff = r1 + radii.radius(atom.symbol()) + criteria.tolerance;
            let bonded = distance > criteria.coincidence && distance <= cutoff;
            trace!(
                "{}{} - {}{}: d = {distance:.6}, cutoff = {cutoff:.6}, \
                 bonded = {bonded}",
                central.atom.symbol(),
                central.index + 1,
                atom.symbol(),
                index + 1,
            );
            bonded.then_some(Neighbor {
                index,
                atom,
                distance,
            })
        })
        .collect()
}
