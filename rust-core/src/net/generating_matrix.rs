use std::fmt;

use anyhow::{Error, bail, ensure};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_NET_ROWS, OUTPUT_DIGITS};

/// Generating matrix of one coordinate of a digital net in base 2.
///
/// Entries are stored as `0`/`1` bytes. A matrix is never modified once it has
/// been built: nets share them behind `Arc`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneratingMatrix")]
pub struct GeneratingMatrix {
    entries: DMatrix<u8>,
}

#[derive(Deserialize)]
struct RawGeneratingMatrix {
    entries: DMatrix<u8>,
}

impl TryFrom<RawGeneratingMatrix> for GeneratingMatrix {
    type Error = Error;

    fn try_from(raw: RawGeneratingMatrix) -> Result<Self, Error> {
        if let Some(bad) = raw.entries.iter().find(|&&b| b > 1) {
            bail!("Generating matrix contains the non-binary entry {}", bad);
        }
        Ok(GeneratingMatrix { entries: raw.entries })
    }
}

impl GeneratingMatrix {
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        GeneratingMatrix {
            entries: DMatrix::zeros(num_rows, num_cols),
        }
    }

    pub fn identity(size: usize) -> Self {
        GeneratingMatrix {
            entries: DMatrix::from_fn(size, size, |i, j| u8::from(i == j)),
        }
    }

    /// Build a matrix from a predicate on `(row, col)`.
    pub fn from_fn<F>(num_rows: usize, num_cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        GeneratingMatrix {
            entries: DMatrix::from_fn(num_rows, num_cols, |i, j| u8::from(f(i, j))),
        }
    }

    /// Build a matrix from rows of binary digits.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, Error> {
        let num_cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == num_cols,
                "Row {} has {} entries, expected {}",
                i,
                row.len(),
                num_cols
            );
            if let Some(bad) = row.iter().find(|&&b| b > 1) {
                bail!("Row {} contains the non-binary entry {}", i, bad);
            }
        }
        Ok(GeneratingMatrix {
            entries: DMatrix::from_fn(rows.len(), num_cols, |i, j| rows[i][j]),
        })
    }

    pub fn num_rows(&self) -> usize {
        self.entries.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.entries.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.entries.shape()
    }

    /// Entry at `(row, col)`; panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.num_rows() && col < self.num_cols(),
            "Entry ({}, {}) out of range for a {}x{} generating matrix",
            row,
            col,
            self.num_rows(),
            self.num_cols()
        );
        self.entries[(row, col)] == 1
    }

    /// Column `col` read as an integer of `digits` binary digits, row 0 being the most significant one.
    ///
    /// Rows past `digits` are not represented.
    pub fn column_as_integer(&self, col: usize, digits: usize) -> u64 {
        assert!(digits <= MAX_NET_ROWS, "Cannot pack {} binary digits into a u64", digits);
        (0..self.num_rows().min(digits)).fold(0u64, |acc, row| {
            acc | (u64::from(self.entries[(row, col)]) << (digits - 1 - row))
        })
    }

    /// Product `self * other` over GF(2); panics if the shapes do not conform.
    pub fn gf2_mul(&self, other: &GeneratingMatrix) -> GeneratingMatrix {
        assert_eq!(
            self.num_cols(),
            other.num_rows(),
            "Cannot multiply a {}x{} matrix by a {}x{} matrix",
            self.num_rows(),
            self.num_cols(),
            other.num_rows(),
            other.num_cols()
        );
        let inner = self.num_cols();
        let entries = DMatrix::from_fn(self.num_rows(), other.num_cols(), |i, j| {
            (0..inner).fold(0u8, |acc, k| acc ^ (self.entries[(i, k)] & other.entries[(k, j)]))
        });
        GeneratingMatrix { entries }
    }

    pub fn is_lower_unitriangular(&self) -> bool {
        (0..self.num_rows()).all(|i| {
            (0..self.num_cols()).all(|j| match i.cmp(&j) {
                std::cmp::Ordering::Less => self.entries[(i, j)] == 0,
                std::cmp::Ordering::Equal => self.entries[(i, j)] == 1,
                std::cmp::Ordering::Greater => true,
            })
        })
    }

    /// Columns as space-separated integers over [`output_digits`] digits, row 0 first (most significant).
    pub fn format_to_columns_reverse(&self) -> String {
        let digits = output_digits(self.num_rows());
        (0..self.num_cols())
            .map(|col| self.column_as_integer(col, digits).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Binary output digits of a matrix with `num_rows` rows: the usual 31, or every row when there are more.
pub fn output_digits(num_rows: usize) -> usize {
    num_rows.max(OUTPUT_DIGITS)
}

impl fmt::Display for GeneratingMatrix {
    /// One line per row, entries separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows() {
            if i > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = (0..self.num_cols())
                .map(|j| self.entries[(i, j)].to_string())
                .collect();
            f.write_str(&row.join(" "))?;
        }
        Ok(())
    }
}
