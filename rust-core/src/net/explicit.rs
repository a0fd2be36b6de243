use anyhow::{Error, ensure};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_NET_COLUMNS, MAX_NET_ROWS};
use crate::interfaces::NetConstructionKind;
use crate::net::construction::NetConstruction;
use crate::net::generating_matrix::GeneratingMatrix;

/// Nets given directly by their generating matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explicit;

/// Shape of the generating matrices of an explicit net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMatrixShape")]
pub struct MatrixShape {
    num_rows: usize,
    num_cols: usize,
}

#[derive(Deserialize)]
struct RawMatrixShape {
    num_rows: usize,
    num_cols: usize,
}

impl TryFrom<RawMatrixShape> for MatrixShape {
    type Error = Error;

    fn try_from(raw: RawMatrixShape) -> Result<Self, Error> {
        MatrixShape::new(raw.num_rows, raw.num_cols)
    }
}

impl MatrixShape {
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self, Error> {
        ensure!(
            num_cols <= MAX_NET_COLUMNS,
            "Digital nets are limited to {} columns, got {}",
            MAX_NET_COLUMNS,
            num_cols
        );
        ensure!(
            num_rows <= MAX_NET_ROWS,
            "Digital nets are limited to {} rows, got {}",
            MAX_NET_ROWS,
            num_rows
        );
        Ok(MatrixShape { num_rows, num_cols })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
}

impl NetConstruction for Explicit {
    type GenValue = GeneratingMatrix;
    type SizeParameter = MatrixShape;

    const KIND: NetConstructionKind = NetConstructionKind::Explicit;
    const IS_SEQUENCE_VIEWABLE: bool = false;

    fn num_rows(shape: &MatrixShape) -> usize {
        shape.num_rows
    }

    fn num_cols(shape: &MatrixShape) -> usize {
        shape.num_cols
    }

    fn check_gen_value(gen_value: &GeneratingMatrix, shape: &MatrixShape, _coord: usize) -> Result<(), Error> {
        ensure!(
            gen_value.shape() == (shape.num_rows, shape.num_cols),
            "Generating matrix is {}x{}, expected {}x{}",
            gen_value.num_rows(),
            gen_value.num_cols(),
            shape.num_rows,
            shape.num_cols
        );
        Ok(())
    }

    fn create_generating_matrix(gen_value: &GeneratingMatrix, _shape: &MatrixShape, _coord: usize) -> GeneratingMatrix {
        gen_value.clone()
    }
}
