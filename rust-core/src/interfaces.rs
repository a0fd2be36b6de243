// Definitions that are used throughout all modules

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

// Enumeration for the ring underlying a lattice rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeKind {
    Integration,
    Polynomial,
}

impl LatticeKind {
    pub fn name(&self) -> &'static str {
        match self {
            LatticeKind::Integration => "ordinary",
            LatticeKind::Polynomial => "polynomial",
        }
    }
}

// Enumeration for index compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compress {
    None,
    Symmetric,
}

impl Compress {
    pub fn name(&self) -> &'static str {
        match self {
            Compress::None => "none",
            Compress::Symmetric => "symmetric",
        }
    }
}

// Enumeration for the ordering of indices within each level of an embedded storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PerLevelOrder {
    #[default]
    Basic,
    Cyclic,
}

// Enumeration for the construction methods of digital nets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetConstructionKind {
    Sobol,
    Polynomial,
    Explicit,
    LeftMatrixScramble,
}

impl NetConstructionKind {
    pub fn name(&self) -> &'static str {
        match self {
            NetConstructionKind::Sobol => "sobol",
            NetConstructionKind::Polynomial => "polynomial",
            NetConstructionKind::Explicit => "explicit",
            NetConstructionKind::LeftMatrixScramble => "lms",
        }
    }

    /// Whether nets built this way are the leading points of an infinite digital sequence.
    pub fn is_sequence_viewable(&self) -> bool {
        use crate::net::{Explicit, LeftMatrixScramble, NetConstruction, Polynomial, Sobol};
        match self {
            NetConstructionKind::Sobol => Sobol::IS_SEQUENCE_VIEWABLE,
            NetConstructionKind::Polynomial => Polynomial::IS_SEQUENCE_VIEWABLE,
            NetConstructionKind::Explicit => Explicit::IS_SEQUENCE_VIEWABLE,
            NetConstructionKind::LeftMatrixScramble => LeftMatrixScramble::IS_SEQUENCE_VIEWABLE,
        }
    }
}

// Enumeration for the textual output of a net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OutputStyle {
    #[default]
    Terminal,
    Net,
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Compress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for NetConstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Compress::None),
            "symmetric" => Ok(Compress::Symmetric),
            other => bail!("Unknown compression type '{}'", other),
        }
    }
}

impl FromStr for NetConstructionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "sobol" => Ok(NetConstructionKind::Sobol),
            "polynomial" => Ok(NetConstructionKind::Polynomial),
            "explicit" => Ok(NetConstructionKind::Explicit),
            "lms" => Ok(NetConstructionKind::LeftMatrixScramble),
            other => bail!("Unknown net construction method '{}'", other),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputStyle::Terminal),
            "net" => Ok(OutputStyle::Net),
            other => bail!("Unknown output style '{}'", other),
        }
    }
}
