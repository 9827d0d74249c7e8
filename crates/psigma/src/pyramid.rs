use std::f64::consts::TAU;

use crate::Error;

/// the number of bond angles needed to describe a trivalent center
pub const MIN_ANGLES: usize = 3;

/// how far the bond angle sum may stray from 2π and still be treated as a
/// planar center. A planar trivalent atom sums to 2π exactly, but the
/// arccosines rarely land there to the last bit
pub const PLANARITY: f64 = 1e-12;

/// compute the pyramidalization parameter P_sigma = sqrt(2π - Σθ) from the
/// bond `angles` in radians. Sums within `planarity` of 2π give exactly zero,
/// while larger excesses return [Error::RadicandNegative] instead of NaN. So a
/// sum of 2π + ε is only rejected once ε exceeds `planarity`; pass 0.0 to
/// reject every excess
pub fn p_sigma(angles: &[f64], planarity: f64) -> Result<f64, Error> {
    if angles.len() < MIN_ANGLES {
        return Err(Error::InsufficientAngles(angles.len()));
    }
    let sum: f64 = angles.iter().sum();
    let radicand = TAU - sum;
    if radicand.abs() <= planarity {
        return Ok(0.0);
    } else if radicand < 0.0 {
        return Err(Error::RadicandNegative { sum });
    }
    Ok(radicand.sqrt())
}

