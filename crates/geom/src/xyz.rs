//! Reading XYZ files. The format is an atom count on the first line, a free
//! comment on the second, and then one `symbol x y z` record per atom.

use std::{fmt::Display, fs::read_to_string, path::Path};

use log::{debug, warn};

use crate::{Atom, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// the first line is not a non-negative integer
    AtomCountUnreadable,
    /// the file does not contain exactly `N + 2` lines
    LineCountMismatch { expected: usize, found: usize },
    /// some of the atom lines could not be parsed
    AtomCountMismatch { declared: usize, parsed: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::AtomCountUnreadable => {
                write!(f, "atom count unreadable on the first line")
            }
            FormatError::LineCountMismatch { expected, found } => write!(
                f,
                "line count mismatch: expected {expected} lines, found {found}"
            ),
            FormatError::AtomCountMismatch { declared, parsed } => write!(
                f,
                "atom count mismatch after parsing: {declared} declared, \
                 {parsed} parsed"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// the path does not resolve to a readable file
    NotFound(String),
    Format(FormatError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "the file {path} cannot be located or read")
            }
            LoadError::Format(e) => {
                write!(f, "this .xyz file is improperly formatted: {e}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Format(e) => Some(e),
        }
    }
}

impl From<FormatError> for LoadError {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

/// read the XYZ file at `path`. Any failure to read the file is reported as
/// [LoadError::NotFound], while problems with its contents are
/// [LoadError::Format]
pub fn load(path: impl AsRef<Path>) -> Result<Geometry, LoadError> {
    let path = path.as_ref();
    let contents = read_to_string(path).map_err(|e| {
        debug!("failed to read {} with {e}", path.display());
        LoadError::NotFound(path.display().to_string())
    })?;
    Ok(parse(&contents)?)
}

/// parse the contents of an XYZ file
pub fn parse(s: &str) -> Result<Geometry, FormatError> {
    let lines: Vec<_> = s.lines().collect();
    let declared: usize = lines
        .first()
        .and_then(|l| l.trim().parse().ok())
        .ok_or(FormatError::AtomCountUnreadable)?;

    let expected = declared + 2;
    if lines.len() != expected {
        return Err(FormatError::LineCountMismatch {
            expected,
            found: lines.len(),
        });
    }

    let mut atoms = Vec::with_capacity(declared);
    for (i, line) in lines.iter().enumerate().skip(2) {
        match line.parse::<Atom>() {
            Ok(atom) => atoms.push(atom),
            Err(e) => warn!("discarding line {}: {e}", i + 1),
        }
    }

    if atoms.len() != declared {
        return Err(FormatError::AtomCountMismatch {
            declared,
            parsed: atoms.len(),
        });
    }

    debug!("parsed {} atoms", atoms.len());

    Ok(Geometry {
        atoms,
        comment: lines[1].to_owned(),
    })
}
