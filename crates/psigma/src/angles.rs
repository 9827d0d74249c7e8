use geom::{Atom, Neighbor, Vec3};

use crate::Error;

/// angle in radians between `v1` and `v2`, or None if either vector has zero
/// length
pub fn angle_between(v1: &Vec3, v2: &Vec3) -> Option<f64> {
    Some(unit_angle(&v1.try_normalize(0.0)?, &v2.try_normalize(0.0)?))
}

/// angle between two unit vectors. The cosine is clamped to [-1, 1] before
/// taking the arccosine so that parallel vectors don't produce NaN
fn unit_angle(u1: &Vec3, u2: &Vec3) -> f64 {
    u1.dot(u2).clamp(-1.0, 1.0).acos()
}

/// every angle at `central` between the bond vectors to two of its
/// `neighbors`, in the order (0, 1), (0, 2), ..., (1, 2), ...
pub fn bond_angles(
    central: &Atom,
    neighbors: &[Neighbor],
) -> Result<Vec<f64>, Error> {
    let units = neighbors
        .iter()
        .map(|n| {
            central
                .vector_to(n.atom)
                .try_normalize(0.0)
                .ok_or(Error::GeometricDegeneracy { index: n.index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut angles = Vec::with_capacity(units.len() * units.len() / 2);
    for (i, ui) in units.iter().enumerate() {
        for uj in &units[i + 1..] {
            angles.push(unit_angle(ui, uj));
        }
    }
    Ok(angles)
}
