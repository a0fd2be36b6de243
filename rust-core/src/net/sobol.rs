use std::sync::Arc;

use anyhow::{Error, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::config::MAX_NET_COLUMNS;
use crate::interfaces::{NetConstructionKind, OutputStyle};
use crate::net::construction::NetConstruction;
use crate::net::generating_matrix::GeneratingMatrix;
use crate::net::primitive_polynomials::{MAX_SOBOL_DIMENSION, primitive_polynomial};

/// Sobol nets: the generating value of a coordinate is its list of initial direction numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sobol;

/// Size parameter of Sobol nets: square generating matrices with `num_cols` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSobolSize")]
pub struct SobolSize {
    num_cols: usize,
}

#[derive(Deserialize)]
struct RawSobolSize {
    num_cols: usize,
}

impl TryFrom<RawSobolSize> for SobolSize {
    type Error = Error;

    fn try_from(raw: RawSobolSize) -> Result<Self, Error> {
        SobolSize::new(raw.num_cols)
    }
}

impl SobolSize {
    pub fn new(num_cols: usize) -> Result<Self, Error> {
        ensure!(
            num_cols <= MAX_NET_COLUMNS,
            "Sobol nets are limited to {} columns, got {}",
            MAX_NET_COLUMNS,
            num_cols
        );
        Ok(SobolSize { num_cols })
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
}

/// Direction numbers `m_1, ..., m_n` of Sobol coordinate `coord >= 1` from its initial ones.
fn direction_numbers(initial: &[u64], coord: usize, count: usize) -> Vec<u64> {
    let (degree, inner) = match primitive_polynomial(coord) {
        Some(poly) => poly,
        None => panic!("No primitive polynomial for Sobol coordinate {}", coord),
    };
    let s = degree as usize;
    let mut m: Vec<u64> = initial.iter().copied().take(count).collect();
    for k in s..count {
        // m_k = 2 a_1 m_{k-1} ^ ... ^ 2^(s-1) a_(s-1) m_{k-s+1} ^ 2^s m_{k-s} ^ m_{k-s}
        let mut value = m[k - s] ^ (m[k - s] << s);
        for i in 1..s {
            if (inner >> (s - 1 - i)) & 1 == 1 {
                value ^= m[k - i] << i;
            }
        }
        m.push(value);
    }
    m
}

impl NetConstruction for Sobol {
    type GenValue = Vec<u64>;
    type SizeParameter = SobolSize;

    const KIND: NetConstructionKind = NetConstructionKind::Sobol;
    const IS_SEQUENCE_VIEWABLE: bool = true;

    fn num_rows(size_parameter: &SobolSize) -> usize {
        size_parameter.num_cols
    }

    fn num_cols(size_parameter: &SobolSize) -> usize {
        size_parameter.num_cols
    }

    // The first coordinate is always the identity and ignores its value
    fn check_gen_value(gen_value: &Vec<u64>, _size_parameter: &SobolSize, coord: usize) -> Result<(), Error> {
        if coord == 0 {
            return Ok(());
        }
        let Some((degree, _)) = primitive_polynomial(coord) else {
            bail!(
                "Sobol nets are limited to dimension {}, coordinate {} is out of range",
                MAX_SOBOL_DIMENSION,
                coord
            );
        };
        ensure!(
            gen_value.len() == degree as usize,
            "Expected {} direction numbers for a primitive polynomial of degree {}, got {}",
            degree,
            degree,
            gen_value.len()
        );
        for (j, &m) in gen_value.iter().enumerate() {
            ensure!(
                m % 2 == 1 && m < (1u64 << (j + 1)),
                "Direction number m_{} = {} must be odd and smaller than 2^{}",
                j + 1,
                m,
                j + 1
            );
        }
        Ok(())
    }

    fn create_generating_matrix(gen_value: &Vec<u64>, size_parameter: &SobolSize, coord: usize) -> GeneratingMatrix {
        let m = size_parameter.num_cols;
        if coord == 0 {
            return GeneratingMatrix::identity(m);
        }
        let numbers = direction_numbers(gen_value, coord, m);
        // Column j holds the binary digits of m_{j+1} / 2^{j+1}
        GeneratingMatrix::from_fn(m, m, |row, col| row <= col && (numbers[col] >> (col - row)) & 1 == 1)
    }

    fn format(
        _matrices: &[Arc<GeneratingMatrix>],
        gen_values: &[Arc<Vec<u64>>],
        _size_parameter: &SobolSize,
        style: OutputStyle,
        _interlacing_factor: usize,
    ) -> String {
        if style != OutputStyle::Terminal {
            return String::new();
        }
        gen_values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(coord, numbers)| {
                let numbers: Vec<String> = numbers.iter().map(u64::to_string).collect();
                format!("{}  // Direction numbers of coordinate {}\n", numbers.join(" "), coord + 1)
            })
            .collect()
    }
}
