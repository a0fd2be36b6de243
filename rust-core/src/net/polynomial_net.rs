use std::sync::Arc;

use anyhow::{Error, ensure};

use crate::config::MAX_NET_COLUMNS;
use crate::interfaces::{NetConstructionKind, OutputStyle};
use crate::lattice::Gf2Poly;
use crate::net::construction::NetConstruction;
use crate::net::generating_matrix::GeneratingMatrix;

/// Polynomial lattice rules seen as digital nets.
///
/// The size parameter is the modulus `P(z)`, the generating value of a
/// coordinate is a polynomial `q(z)` with `deg q < deg P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polynomial;

/// First `count` digits `w_1, w_2, ...` of the expansion `q(z) / P(z) = sum_l w_l z^(-l)`.
pub fn laurent_digits(q: &Gf2Poly, modulus: &Gf2Poly, count: usize) -> Vec<bool> {
    let Some(m) = modulus.degree() else {
        return Vec::new();
    };
    let mut remainder = q.rem(modulus).bits();
    let mut digits = Vec::with_capacity(count);
    for _ in 0..count {
        remainder <<= 1;
        let digit = (remainder >> m) & 1 == 1;
        if digit {
            remainder ^= modulus.bits();
        }
        digits.push(digit);
    }
    digits
}

impl NetConstruction for Polynomial {
    type GenValue = Gf2Poly;
    type SizeParameter = Gf2Poly;

    const KIND: NetConstructionKind = NetConstructionKind::Polynomial;
    const IS_SEQUENCE_VIEWABLE: bool = false;

    fn num_rows(modulus: &Gf2Poly) -> usize {
        modulus.degree().unwrap_or(0)
    }

    fn num_cols(modulus: &Gf2Poly) -> usize {
        modulus.degree().unwrap_or(0)
    }

    fn check_gen_value(gen_value: &Gf2Poly, modulus: &Gf2Poly, _coord: usize) -> Result<(), Error> {
        let m = modulus
            .degree()
            .ok_or_else(|| Error::msg("Polynomial net modulus must be non-zero"))?;
        ensure!(
            m <= MAX_NET_COLUMNS,
            "Polynomial net modulus degree {} exceeds {}",
            m,
            MAX_NET_COLUMNS
        );
        ensure!(!gen_value.is_zero(), "Generating polynomial must be non-zero");
        ensure!(
            gen_value.degree().is_some_and(|d| d < m),
            "Generating polynomial {} must have degree below the modulus degree {}",
            gen_value,
            m
        );
        Ok(())
    }

    // Hankel matrix C[i][j] = w_{i+j+1}
    fn create_generating_matrix(gen_value: &Gf2Poly, modulus: &Gf2Poly, _coord: usize) -> GeneratingMatrix {
        let m = modulus.degree().unwrap_or(0);
        let digits = laurent_digits(gen_value, modulus, (2 * m).saturating_sub(1));
        GeneratingMatrix::from_fn(m, m, |i, j| digits[i + j])
    }

    fn format(
        _matrices: &[Arc<GeneratingMatrix>],
        gen_values: &[Arc<Gf2Poly>],
        modulus: &Gf2Poly,
        style: OutputStyle,
        _interlacing_factor: usize,
    ) -> String {
        if style != OutputStyle::Terminal {
            return String::new();
        }
        let mut res = format!("{}  // Modulus\n", modulus);
        for (coord, q) in gen_values.iter().enumerate() {
            res += &format!("{}  // Generating polynomial of coordinate {}\n", q, coord + 1);
        }
        res
    }
}
