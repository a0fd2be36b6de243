use std::fmt::Debug;
use std::sync::Arc;

use anyhow::Error;

use crate::interfaces::{NetConstructionKind, OutputStyle};
use crate::net::generating_matrix::GeneratingMatrix;

/// A way of building digital nets: the capabilities specific to one construction method.
///
/// A method is defined by two types:
/// - the size parameter, common to every net of the family and never optimized,
/// - the generating value, one per coordinate, which is what a search explores.
pub trait NetConstruction: Debug + Send + Sync + 'static {
    type GenValue: Debug + Clone + PartialEq + Send + Sync;
    type SizeParameter: Debug + Clone + Send + Sync;

    const KIND: NetConstructionKind;

    /// Whether nets of this family extend to infinite digital sequences.
    const IS_SEQUENCE_VIEWABLE: bool;

    fn num_rows(size_parameter: &Self::SizeParameter) -> usize;

    fn num_cols(size_parameter: &Self::SizeParameter) -> usize;

    /// Reject a generating value that cannot define coordinate `coord`.
    fn check_gen_value(
        gen_value: &Self::GenValue,
        size_parameter: &Self::SizeParameter,
        coord: usize,
    ) -> Result<(), Error>;

    /// Generating matrix of coordinate `coord`; `gen_value` has passed [`Self::check_gen_value`].
    fn create_generating_matrix(
        gen_value: &Self::GenValue,
        size_parameter: &Self::SizeParameter,
        coord: usize,
    ) -> GeneratingMatrix;

    /// Method-specific annotations appended to the generic net description.
    fn format(
        _matrices: &[Arc<GeneratingMatrix>],
        _gen_values: &[Arc<Self::GenValue>],
        _size_parameter: &Self::SizeParameter,
        _style: OutputStyle,
        _interlacing_factor: usize,
    ) -> String {
        String::new()
    }
}
