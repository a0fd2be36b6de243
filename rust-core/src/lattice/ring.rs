use std::fmt::Debug;

use anyhow::{Error, ensure};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::MAX_POLYNOMIAL_DEGREE;
use crate::interfaces::LatticeKind;
use crate::lattice::polynomial::Gf2Poly;

/// Arithmetic of the ring a lattice rule lives in.
///
/// Index views only ever go through this interface, so the same `Stride`
/// code serves integer and polynomial lattices.
pub trait LatticeRing: Debug + Clone + Copy + Send + Sync + 'static {
    /// Ring element: generating values, strides and moduli all have this type.
    type Element: Debug + Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned;

    const KIND: LatticeKind;

    /// Check that `modulus` defines a non-trivial quotient ring.
    fn validate_modulus(modulus: &Self::Element) -> Result<(), Error>;

    /// Number of points of a lattice with the given modulus.
    fn num_points(modulus: &Self::Element) -> u64;

    fn reduce(value: &Self::Element, modulus: &Self::Element) -> Self::Element;

    /// Product of `a` and `b` reduced modulo `modulus`.
    fn mul_mod(a: &Self::Element, b: &Self::Element, modulus: &Self::Element) -> Self::Element;

    fn to_index(value: &Self::Element) -> u64;

    fn from_index(index: u64) -> Self::Element;
}

/// Ordinary integration lattices: integers modulo the number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLattice;

/// Polynomial lattice rules: GF(2)[z] modulo a polynomial `P(z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialLattice;

impl LatticeRing for IntegerLattice {
    type Element = u64;

    const KIND: LatticeKind = LatticeKind::Integration;

    fn validate_modulus(modulus: &u64) -> Result<(), Error> {
        ensure!(*modulus > 0, "Integration lattice size must be positive");
        Ok(())
    }

    fn num_points(modulus: &u64) -> u64 {
        *modulus
    }

    fn reduce(value: &u64, modulus: &u64) -> u64 {
        value % modulus
    }

    fn mul_mod(a: &u64, b: &u64, modulus: &u64) -> u64 {
        ((*a as u128 * *b as u128) % *modulus as u128) as u64
    }

    fn to_index(value: &u64) -> u64 {
        *value
    }

    fn from_index(index: u64) -> u64 {
        index
    }
}

impl LatticeRing for PolynomialLattice {
    type Element = Gf2Poly;

    const KIND: LatticeKind = LatticeKind::Polynomial;

    fn validate_modulus(modulus: &Gf2Poly) -> Result<(), Error> {
        let degree = modulus
            .degree()
            .ok_or_else(|| Error::msg("Polynomial lattice modulus must be non-zero"))?;
        // 2^deg points are indexed by u64
        ensure!(
            degree < MAX_POLYNOMIAL_DEGREE,
            "Polynomial lattice modulus degree {} is too large",
            degree
        );
        Ok(())
    }

    fn num_points(modulus: &Gf2Poly) -> u64 {
        1u64 << modulus.degree().unwrap_or(0)
    }

    fn reduce(value: &Gf2Poly, modulus: &Gf2Poly) -> Gf2Poly {
        value.rem(modulus)
    }

    fn mul_mod(a: &Gf2Poly, b: &Gf2Poly, modulus: &Gf2Poly) -> Gf2Poly {
        a.mul_mod(b, modulus)
    }

    fn to_index(value: &Gf2Poly) -> u64 {
        value.bits()
    }

    fn from_index(index: u64) -> Gf2Poly {
        Gf2Poly::from_bits(index)
    }
}
