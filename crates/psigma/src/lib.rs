//! Pyramidalization of trivalent atoms from XYZ geometries.
//!
//! The calculation is a short pipeline of pure functions:
//! [geom::xyz::load] reads the geometry, [geom::find_central] and
//! [geom::bonded_neighbors] locate the central atom and its bonds,
//! [angles::bond_angles] measures the angles between those bonds, and
//! [pyramid::p_sigma] reduces the angles to P_sigma = sqrt(2π - Σθ). A
//! [Calculator] ties the stages together.

use std::path::Path;

use geom::{BondCriteria, Geometry, RadiusTable, bonded_neighbors, find_central};
use log::debug;

pub mod angles;
pub mod config;
pub mod driver;
mod error;
pub mod pyramid;
pub mod report;


pub use config::Config;
pub use error::Error;
pub use report::{Bond, Report};

/// the minimum number of bonded neighbors needed for three bond angles
pub const MIN_NEIGHBORS: usize = 3;

/// Runs the full calculation for any number of geometries with one fixed set
/// of settings. The radius table is built once in [Calculator::new] and only
/// read afterwards, so a `Calculator` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Calculator {
    element: String,
    radii: RadiusTable,
    criteria: BondCriteria,
    planarity: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Calculator {
    pub fn new(config: &Config) -> Self {
        Self {
            element: config.element.clone(),
            radii: config.radius_table(),
            criteria: config.criteria,
            planarity: config.planarity,
        }
    }

    /// the symbol of the central atom
    pub fn element(&self) -> &str {
        &self.element
    }

    /// load the XYZ file at `path` and [Calculator::compute] on its geometry
    pub fn process(&self, path: impl AsRef<Path>) -> Result<Report, Error> {
        let path = path.as_ref();
        debug!("loading {}", path.display());
        let geom = geom::xyz::load(path)?;
        self.compute(&geom)
    }

    /// compute P_sigma for the first atom in `geom` matching the configured
    /// element
    pub fn compute(&self, geom: &Geometry) -> Result<Report, Error> {
        let central = find_central(geom, &self.element)
            .ok_or_else(|| Error::CentralNotFound(self.element.clone()))?;
        debug!("central atom: {}{}", self.element, central.index + 1);

        let neighbors =
            bonded_neighbors(&central, geom, &self.radii, &self.criteria);
        debug!(
            "bonded neighbors: {:?}",
            neighbors.iter().map(|n| n.index + 1).collect::<Vec<_>>()
        );
        if neighbors.len() < MIN_NEIGHBORS {
            return Err(Error::InsufficientNeighbors {
                symbol: self.element.clone(),
                found: neighbors.len(),
            });
        }

        let angles = angles::bond_angles(central.atom, &neighbors)?;
        debug!(
            "bond angles (deg): {:?}",
            angles.iter().map(|a| a.to_degrees()).collect::<Vec<_>>()
        );

        let p_sigma = pyramid::p_sigma(&angles, self.planarity)?;
        debug!("P_sigma = {p_sigma}");

        Ok(Report {
            central: central.index,
            element: self.element.clone(),
            bonds: neighbors
                .iter()
                .map(|n| Bond {
                    index: n.index,
                    symbol: n.atom.symbol().to_owned(),
                    distance: n.distance,
                })
                .collect(),
            angle_sum: angles.iter().sum(),
            angles,
            p_sigma,
        })
    }
}
