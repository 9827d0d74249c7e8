//! Configuration settings for a P_sigma calculation

use std::{collections::BTreeMap, fmt::Display, fs::read_to_string, path::Path};

use geom::{
    BondCriteria, RadiusTable,
    bonds::{BOND_TOLERANCE, COINCIDENCE},
    radii::DEFAULT_RADIUS,
};
use serde::Deserialize;

use crate::pyramid::PLANARITY;


/// the element whose pyramidalization is measured unless told otherwise
pub const DEFAULT_ELEMENT: &str = "N";

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// The symbol of the central atom. The first atom in the geometry with
    /// exactly this symbol is used. Defaults to "N".
    element: Option<String>,

    /// The slack in Å added to the sum of two covalent radii when deciding
    /// whether two atoms are bonded. Defaults to 0.4.
    tolerance: Option<f64>,

    /// The covalent radius given to any element not in the built-in table or
    /// in `radii`. Defaults to 0.0, which effectively prevents unknown
    /// elements from bonding.
    default_radius: Option<f64>,

    /// The distance in Å below which an atom is considered to sit on top of
    /// the central atom and is excluded from bonding. Defaults to 1e-8.
    coincidence: Option<f64>,

    /// How far the bond angle sum may exceed 2π and still be treated as a
    /// planar center with P_sigma = 0. Defaults to 1e-12.
    planarity: Option<f64>,

    /// Per-element covalent radii in Å replacing or extending the built-in
    /// table.
    #[serde(default)]
    radii: BTreeMap<String, f64>,
}

/// Construct a full `Config` using [Config::load] on a TOML file or start from
/// [Config::default]
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(from = "RawConfig")]
pub struct Config {
    /// symbol of the central atom
    pub element: String,

    /// distance cutoffs for bonding
    pub criteria: BondCriteria,

    /// radius for elements missing from the table
    pub default_radius: f64,

    /// tolerance for angle sums slightly above 2π
    pub planarity: f64,

    /// overrides for the built-in covalent radii
    pub radii: BTreeMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            element: raw.element.unwrap_or_else(|| DEFAULT_ELEMENT.to_owned()),
            criteria: BondCriteria {
                tolerance: raw.tolerance.unwrap_or(BOND_TOLERANCE),
                coincidence: raw.coincidence.unwrap_or(COINCIDENCE),
            },
            default_radius: raw.default_radius.unwrap_or(DEFAULT_RADIUS),
            planarity: raw.planarity.unwrap_or(PLANARITY),
            radii: raw.radii,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Toml(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
        }
    }
}

impl Config {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = read_to_string(filename).map_err(ConfigError::Io)?;
        contents.parse()
    }

    /// the built-in covalent radii with the overrides and default radius from
    /// `self` applied
    pub fn radius_table(&self) -> RadiusTable {
        RadiusTable::covalent()
            .with_default(self.default_radius)
            .with_overrides(&self.radii)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }
}
