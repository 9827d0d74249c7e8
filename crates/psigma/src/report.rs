use std::fmt::Display;

use serde::Serialize;

/// the number of significant digits used when printing P_sigma
pub const DIGITS: usize = 10;

/// an atom bonded to the central atom
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bond {
    /// zero-based position of the atom in the geometry
    pub index: usize,
    pub symbol: String,
    /// bond length in Å
    pub distance: f64,
}

/// The outcome of a successful calculation on one geometry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// zero-based position of the central atom in the geometry
    pub central: usize,
    pub element: String,
    pub bonds: Vec<Bond>,
    /// bond angles at the central atom in radians
    pub angles: Vec<f64>,
    pub angle_sum: f64,
    pub p_sigma: f64,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P_Sigma = {}", sig_figs(self.p_sigma, DIGITS))
    }
}

impl Report {
    /// a longer, human-readable description of the bonding around the central
    /// atom, one line per bond and angle
    pub fn summary(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        let _ = writeln!(
            ret,
            "central atom: {}{}",
            self.element,
            self.central + 1
        );
        for bond in &self.bonds {
            let _ = writeln!(
                ret,
                "bond {}{}: {:.6} Å",
                bond.symbol,
                bond.index + 1,
                bond.distance
            );
        }
        let mut angles = self.angles.iter();
        for (i, a) in self.bonds.iter().enumerate() {
            for b in &self.bonds[i + 1..] {
                if let Some(angle) = angles.next() {
                    let _ = writeln!(
                        ret,
                        "angle {}{}-{}{}-{}{}: {:.4}°",
                        a.symbol,
                        a.index + 1,
                        self.element,
                        self.central + 1,
                        b.symbol,
                        b.index + 1,
                        angle.to_degrees(),
                    );
                }
            }
        }
        let _ = writeln!(ret, "angle sum: {:.4}°", self.angle_sum.to_degrees());
        let _ = write!(ret, "{self}");
        ret
    }
}

/// format `value` with `digits` significant digits in the manner of C's `%g`:
/// fixed notation unless the decimal exponent is below -4 or at least
/// `digits`, and no trailing zeros
pub fn sig_figs(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);
    // the exponent has to come from the rounded value, since rounding can
    // carry into the next power of ten
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
