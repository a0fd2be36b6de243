use std::marker::PhantomData;

use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::lattice::polynomial::Gf2Poly;
use crate::lattice::ring::{IntegerLattice, LatticeRing, PolynomialLattice};

/// Size of a lattice rule: its modulus and the number of points it induces.
///
/// Only the modulus is serialized; deserialization goes through [`SizeParam::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", try_from = "RawSizeParam<L>")]
pub struct SizeParam<L: LatticeRing> {
    modulus: L::Element,
    #[serde(skip_serializing)]
    num_points: u64,
    #[serde(skip)]
    _ring: PhantomData<L>,
}

/// Serialized form of a [`SizeParam`], validated on conversion.
#[derive(Deserialize)]
#[serde(bound = "")]
struct RawSizeParam<L: LatticeRing> {
    modulus: L::Element,
    #[serde(skip)]
    _ring: PhantomData<L>,
}

impl<L: LatticeRing> TryFrom<RawSizeParam<L>> for SizeParam<L> {
    type Error = Error;

    fn try_from(raw: RawSizeParam<L>) -> Result<Self, Error> {
        SizeParam::new(raw.modulus)
    }
}

impl<L: LatticeRing> SizeParam<L> {
    /// Construct the size parameter of a lattice with the given modulus.
    pub fn new(modulus: L::Element) -> Result<Self, Error> {
        L::validate_modulus(&modulus)?;
        let num_points = L::num_points(&modulus);
        Ok(SizeParam {
            modulus,
            num_points,
            _ring: PhantomData,
        })
    }

    pub fn modulus(&self) -> &L::Element {
        &self.modulus
    }

    pub fn num_points(&self) -> u64 {
        self.num_points
    }
}

impl SizeParam<IntegerLattice> {
    /// Integration lattice with `n` points (modulus `n`).
    pub fn integration(num_points: u64) -> Result<Self, Error> {
        Self::new(num_points)
    }
}

impl SizeParam<PolynomialLattice> {
    /// Polynomial lattice rule with modulus `P(z)`, hence `2^deg P` points.
    pub fn polynomial(modulus: Gf2Poly) -> Result<Self, Error> {
        Self::new(modulus)
    }

    /// Base-2 logarithm of the number of points, i.e. the degree of the modulus.
    pub fn log2_num_points(&self) -> usize {
        self.modulus.degree().unwrap_or(0)
    }
}
