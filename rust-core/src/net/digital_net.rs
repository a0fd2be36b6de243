use std::sync::Arc;

use anyhow::{Context, Error, ensure};
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::MAX_NET_COLUMNS;
use crate::interfaces::{NetConstructionKind, OutputStyle};
use crate::net::abstract_net::{AbstractDigitalNet, format_net_description};
use crate::net::construction::NetConstruction;
use crate::net::generating_matrix::GeneratingMatrix;

/// Digital net built by construction method `C` from a size parameter and one
/// generating value per coordinate.
///
/// Generating matrices and generating values are held behind `Arc`s: extending
/// a net with [`append_new_coordinate`](Self::append_new_coordinate) builds
/// only the new coordinate and shares everything else with the source net.
#[derive(Debug)]
pub struct DigitalNet<C: NetConstruction> {
    num_rows: usize,
    num_cols: usize,
    size_parameter: Arc<C::SizeParameter>,
    generating_matrices: Vec<Arc<GeneratingMatrix>>,
    gen_values: Vec<Arc<C::GenValue>>,
}

impl<C: NetConstruction> Clone for DigitalNet<C> {
    fn clone(&self) -> Self {
        DigitalNet {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            size_parameter: Arc::clone(&self.size_parameter),
            generating_matrices: self.generating_matrices.clone(),
            gen_values: self.gen_values.clone(),
        }
    }
}

impl<C: NetConstruction> DigitalNet<C> {
    /// Construct a net from its size parameter and the generating values of its coordinates.
    ///
    /// Every generating value is checked before any matrix is built; the
    /// matrix of coordinate `k` is built from `(gen_values[k], size_parameter, k)`.
    pub fn new(size_parameter: C::SizeParameter, gen_values: Vec<C::GenValue>) -> Result<Self, Error> {
        let mut net = Self::placeholder(size_parameter);
        net.check_shape()?;
        for (coord, gen_value) in gen_values.iter().enumerate() {
            C::check_gen_value(gen_value, &net.size_parameter, coord).with_context(|| {
                format!("Invalid {} generating value for coordinate {}", C::KIND, coord)
            })?;
        }

        net.generating_matrices = build_matrices::<C>(&gen_values, &net.size_parameter);
        net.gen_values = gen_values.into_iter().map(Arc::new).collect();

        debug!(
            "Constructed {} net: dimension {}, {}x{} matrices",
            C::KIND,
            net.dimension(),
            net.num_rows,
            net.num_cols
        );
        Ok(net)
    }

    /// Net of dimension 0, used as the starting point of coordinate-by-coordinate constructions.
    pub fn placeholder(size_parameter: C::SizeParameter) -> Self {
        DigitalNet {
            num_rows: C::num_rows(&size_parameter),
            num_cols: C::num_cols(&size_parameter),
            size_parameter: Arc::new(size_parameter),
            generating_matrices: Vec::new(),
            gen_values: Vec::new(),
        }
    }

    /// New net with one more coordinate, built from `gen_value`.
    ///
    /// Only the new generating matrix is computed; the matrices and generating
    /// values of the existing coordinates are shared with `self`, which stays
    /// valid.
    pub fn append_new_coordinate(&self, gen_value: C::GenValue) -> Result<Self, Error> {
        self.check_shape()?;
        let coord = self.dimension();
        C::check_gen_value(&gen_value, &self.size_parameter, coord).with_context(|| {
            format!("Invalid {} generating value for coordinate {}", C::KIND, coord)
        })?;

        trace!("Building {} generating matrix for coordinate {}", C::KIND, coord);
        let matrix = C::create_generating_matrix(&gen_value, &self.size_parameter, coord);

        let mut generating_matrices = self.generating_matrices.clone();
        generating_matrices.push(Arc::new(matrix));
        let mut gen_values = self.gen_values.clone();
        gen_values.push(Arc::new(gen_value));

        debug!("Extended {} net to dimension {}", C::KIND, coord + 1);
        Ok(DigitalNet {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            size_parameter: Arc::clone(&self.size_parameter),
            generating_matrices,
            gen_values,
        })
    }

    /// Append the coordinates of `gen_values` one after the other.
    pub fn extend<I>(&self, gen_values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = C::GenValue>,
    {
        gen_values
            .into_iter()
            .try_fold(self.clone(), |net, gen_value| net.append_new_coordinate(gen_value))
    }

    pub fn kind(&self) -> NetConstructionKind {
        C::KIND
    }

    pub fn size_parameter(&self) -> &C::SizeParameter {
        &self.size_parameter
    }

    /// Size parameter shared by every net of the lineage.
    pub fn shared_size_parameter(&self) -> &Arc<C::SizeParameter> {
        &self.size_parameter
    }

    pub fn gen_values(&self) -> &[Arc<C::GenValue>] {
        &self.gen_values
    }

    /// Generating value of coordinate `coord`; panics unless `coord < dimension()`.
    pub fn gen_value(&self, coord: usize) -> &C::GenValue {
        match self.gen_values.get(coord) {
            Some(value) => value,
            None => panic!(
                "Coordinate {} out of range for a digital net of dimension {}",
                coord,
                self.dimension()
            ),
        }
    }

    /// Shared handle on the generating matrix of coordinate `coord`; panics unless `coord < dimension()`.
    pub fn shared_generating_matrix(&self, coord: usize) -> &Arc<GeneratingMatrix> {
        match self.generating_matrices.get(coord) {
            Some(matrix) => matrix,
            None => panic!(
                "Coordinate {} out of range for a digital net of dimension {}",
                coord,
                self.dimension()
            ),
        }
    }

    fn check_shape(&self) -> Result<(), Error> {
        ensure!(
            self.num_cols <= MAX_NET_COLUMNS,
            "Digital nets are limited to {} columns, got {}",
            MAX_NET_COLUMNS,
            self.num_cols
        );
        Ok(())
    }
}

impl<C: NetConstruction> Default for DigitalNet<C>
where
    C::SizeParameter: Default,
{
    fn default() -> Self {
        Self::placeholder(Default::default())
    }
}

impl<C: NetConstruction> AbstractDigitalNet for DigitalNet<C> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn generating_matrices(&self) -> &[Arc<GeneratingMatrix>] {
        &self.generating_matrices
    }

    fn format(&self, style: OutputStyle, interlacing_factor: usize) -> String {
        let mut res = format_net_description(self, style, interlacing_factor);
        res += &C::format(
            &self.generating_matrices,
            &self.gen_values,
            &self.size_parameter,
            style,
            interlacing_factor,
        );
        res
    }

    fn is_sequence_viewable(&self) -> bool {
        C::IS_SEQUENCE_VIEWABLE
    }
}

#[cfg(not(feature = "parallel"))]
fn build_matrices<C: NetConstruction>(
    gen_values: &[C::GenValue],
    size_parameter: &C::SizeParameter,
) -> Vec<Arc<GeneratingMatrix>> {
    gen_values
        .iter()
        .enumerate()
        .map(|(coord, gen_value)| {
            trace!("Building {} generating matrix for coordinate {}", C::KIND, coord);
            Arc::new(C::create_generating_matrix(gen_value, size_parameter, coord))
        })
        .collect()
}

// Coordinates are independent; collect keeps them in coordinate order
#[cfg(feature = "parallel")]
fn build_matrices<C: NetConstruction>(
    gen_values: &[C::GenValue],
    size_parameter: &C::SizeParameter,
) -> Vec<Arc<GeneratingMatrix>> {
    gen_values
        .par_iter()
        .enumerate()
        .map(|(coord, gen_value)| {
            trace!("Building {} generating matrix for coordinate {}", C::KIND, coord);
            Arc::new(C::create_generating_matrix(gen_value, size_parameter, coord))
        })
        .collect()
}
