use std::fmt;
use std::str::FromStr;

use anyhow::{Error, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::config::MAX_POLYNOMIAL_DEGREE;

/// A polynomial over GF(2) of degree at most 63.
///
/// Bit `k` of the packed word is the coefficient of `z^k`, so the integer `i`
/// and the polynomial `i(z)` share the same representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Gf2Poly(u64);

impl Gf2Poly {
    pub const ZERO: Gf2Poly = Gf2Poly(0);
    pub const ONE: Gf2Poly = Gf2Poly(1);

    /// Build a polynomial from its packed coefficient word.
    pub const fn from_bits(bits: u64) -> Self {
        Gf2Poly(bits)
    }

    /// Packed coefficient word.
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Build a polynomial from coefficients listed from `z^0` upwards.
    pub fn from_coefficients(coefficients: &[u8]) -> Result<Self, Error> {
        ensure!(
            coefficients.len() <= MAX_POLYNOMIAL_DEGREE + 1,
            "Polynomial of degree {} exceeds the maximal degree {}",
            coefficients.len().saturating_sub(1),
            MAX_POLYNOMIAL_DEGREE
        );
        let mut bits = 0u64;
        for (k, &c) in coefficients.iter().enumerate() {
            match c {
                0 => {}
                1 => bits |= 1 << k,
                other => bail!("Coefficient {} of z^{} is not a binary digit", other, k),
            }
        }
        Ok(Gf2Poly(bits))
    }

    /// The monomial `z^k`.
    pub fn monomial(k: usize) -> Self {
        assert!(k <= MAX_POLYNOMIAL_DEGREE, "Monomial degree {} too large", k);
        Gf2Poly(1 << k)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as usize)
        }
    }

    /// Coefficient of `z^k`.
    pub fn coefficient(&self, k: usize) -> bool {
        k < 64 && (self.0 >> k) & 1 == 1
    }

    /// Remainder of the division by `modulus`.
    pub fn rem(&self, modulus: &Gf2Poly) -> Gf2Poly {
        Gf2Poly(rem_wide(self.0 as u128, modulus) as u64)
    }

    /// Product reduced modulo `modulus`.
    pub fn mul_mod(&self, other: &Gf2Poly, modulus: &Gf2Poly) -> Gf2Poly {
        Gf2Poly(rem_wide(clmul(self.0, other.0), modulus) as u64)
    }
}

/// Carry-less product of two packed polynomials.
fn clmul(a: u64, b: u64) -> u128 {
    let mut acc = 0u128;
    let mut b = b;
    let a = a as u128;
    let mut shift = 0;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a << shift;
        }
        b >>= 1;
        shift += 1;
    }
    acc
}

fn rem_wide(mut value: u128, modulus: &Gf2Poly) -> u128 {
    let m_deg = modulus
        .degree()
        .expect("Polynomial reduction by the zero polynomial");
    let m = modulus.0 as u128;
    while value != 0 {
        let v_deg = 127 - value.leading_zeros() as usize;
        if v_deg < m_deg {
            break;
        }
        value ^= m << (v_deg - m_deg);
    }
    value
}

impl fmt::Display for Gf2Poly {
    /// Writes `1 + z + z^3` style output, `0` for the zero polynomial.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0");
        }
        let mut first = true;
        for k in 0..64 {
            if !self.coefficient(k) {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match k {
                0 => f.write_str("1")?,
                1 => f.write_str("z")?,
                _ => write!(f, "z^{}", k)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Gf2Poly {
    type Err = Error;

    /// Parses a string of binary digits, coefficient of `z^0` first (`"1101"` is `1 + z + z^3`).
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        ensure!(!s.is_empty(), "Empty polynomial string");
        let coefficients = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0u8),
                '1' => Ok(1u8),
                other => Err(anyhow::anyhow!("Invalid polynomial digit '{}' in '{}'", other, s)),
            })
            .collect::<Result<Vec<u8>, Error>>()?;
        Gf2Poly::from_coefficients(&coefficients)
    }
}
