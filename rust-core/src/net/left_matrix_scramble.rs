use std::fmt;
use std::sync::Arc;

use anyhow::{Error, ensure};

use crate::config::MAX_NET_ROWS;
use crate::interfaces::{NetConstructionKind, OutputStyle};
use crate::net::abstract_net::AbstractDigitalNet;
use crate::net::construction::NetConstruction;
use crate::net::generating_matrix::GeneratingMatrix;

/// Left matrix scrambles of a base net.
///
/// The generating value of coordinate `k` is a lower unitriangular scrambling
/// matrix `S_k`, and the scrambled generating matrix is `S_k C_k` over GF(2)
/// where `C_k` is the base net's matrix for the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftMatrixScramble;

/// Size parameter of scrambled nets: the base net and the number of output rows.
#[derive(Clone)]
pub struct ScrambleSize {
    base: Arc<dyn AbstractDigitalNet>,
    num_rows: usize,
}

impl ScrambleSize {
    pub fn new(base: Arc<dyn AbstractDigitalNet>, num_rows: usize) -> Result<Self, Error> {
        ensure!(
            num_rows >= base.num_rows(),
            "Scrambled nets need at least as many rows as the base net ({}), got {}",
            base.num_rows(),
            num_rows
        );
        ensure!(
            num_rows <= MAX_NET_ROWS,
            "Digital nets are limited to {} rows, got {}",
            MAX_NET_ROWS,
            num_rows
        );
        Ok(ScrambleSize { base, num_rows })
    }

    pub fn base(&self) -> &Arc<dyn AbstractDigitalNet> {
        &self.base
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }
}

impl fmt::Debug for ScrambleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrambleSize")
            .field("base_dimension", &self.base.dimension())
            .field("base_num_rows", &self.base.num_rows())
            .field("base_num_cols", &self.base.num_cols())
            .field("num_rows", &self.num_rows)
            .finish()
    }
}

impl NetConstruction for LeftMatrixScramble {
    type GenValue = GeneratingMatrix;
    type SizeParameter = ScrambleSize;

    const KIND: NetConstructionKind = NetConstructionKind::LeftMatrixScramble;
    const IS_SEQUENCE_VIEWABLE: bool = false;

    fn num_rows(size_parameter: &ScrambleSize) -> usize {
        size_parameter.num_rows
    }

    fn num_cols(size_parameter: &ScrambleSize) -> usize {
        size_parameter.base.num_cols()
    }

    fn check_gen_value(gen_value: &GeneratingMatrix, size_parameter: &ScrambleSize, coord: usize) -> Result<(), Error> {
        let base = &size_parameter.base;
        ensure!(
            coord < base.dimension(),
            "Coordinate {} exceeds the base net dimension {}",
            coord,
            base.dimension()
        );
        ensure!(
            gen_value.shape() == (size_parameter.num_rows, base.num_rows()),
            "Scrambling matrix is {}x{}, expected {}x{}",
            gen_value.num_rows(),
            gen_value.num_cols(),
            size_parameter.num_rows,
            base.num_rows()
        );
        ensure!(
            gen_value.is_lower_unitriangular(),
            "Scrambling matrix must be lower triangular with a unit diagonal"
        );
        Ok(())
    }

    fn create_generating_matrix(gen_value: &GeneratingMatrix, size_parameter: &ScrambleSize, coord: usize) -> GeneratingMatrix {
        gen_value.gf2_mul(size_parameter.base.generating_matrix(coord))
    }

    fn format(
        _matrices: &[Arc<GeneratingMatrix>],
        _gen_values: &[Arc<GeneratingMatrix>],
        size_parameter: &ScrambleSize,
        style: OutputStyle,
        _interlacing_factor: usize,
    ) -> String {
        match style {
            OutputStyle::Terminal => format!(
                "{}  // Number of rows of the base net\n",
                size_parameter.base.num_rows()
            ),
            OutputStyle::Net => String::new(),
        }
    }
}
