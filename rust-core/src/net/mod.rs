// Net module: digital nets in base 2 and the construction methods that produce them
// A net is a vector of generating matrices; a construction method turns one generating value per coordinate into a matrix

// ======================== MODULE DECLARATIONS ========================
pub mod abstract_net;
pub mod construction;
pub mod digital_net;
pub mod explicit;
pub mod generating_matrix;
pub mod left_matrix_scramble;
pub mod polynomial_net;
pub mod primitive_polynomials;
pub mod sobol;

// Test modules
mod _tests_constructions;
mod _tests_generating_matrix;

// ======================== GENERATING MATRICES ========================
pub use generating_matrix::{
    GeneratingMatrix, // struct - immutable bit matrix of one coordinate (nalgebra DMatrix<u8> of 0/1)
    output_digits,    // fn(num_rows) -> usize - binary digits per column in the net dump
};
// GeneratingMatrix impl methods:
//   zeros(rows, cols) / identity(n) / from_fn(rows, cols, f)      - constructors
//   from_rows(rows: &[Vec<u8>]) -> Result<Self>                  - checked constructor from binary rows
//   num_rows(&self) / num_cols(&self) / shape(&self)
//   get(&self, row, col) -> bool                                  - panics out of range
//   gf2_mul(&self, other) -> GeneratingMatrix                     - product over GF(2)
//   format_to_columns_reverse(&self) -> String                    - columns as integers, row 0 most significant

// ======================== ABSTRACT NETS ========================
pub use abstract_net::{
    AbstractDigitalNet,     // trait - dimension, matrix shape, shared matrices, format, sequence viewability
    format_net_description, // fn(net: &dyn AbstractDigitalNet, style, interlacing_factor) -> String - generic description
};

// ======================== CONSTRUCTED NETS ========================
pub use construction::NetConstruction; // trait - capability table of one construction method
pub use digital_net::DigitalNet; // struct - net built by a construction method, shares matrices across extensions
// DigitalNet impl methods:
//   new(size_parameter, gen_values) -> Result<Self>               - validates then builds one matrix per coordinate
//   placeholder(size_parameter) -> Self                           - dimension 0
//   append_new_coordinate(&self, gen_value) -> Result<Self>       - one new matrix, everything else shared
//   extend(&self, gen_values) -> Result<Self>                     - repeated append_new_coordinate
//   size_parameter(&self) / gen_value(&self, coord) / shared_generating_matrix(&self, coord)

// ======================== CONSTRUCTION METHODS ========================
pub use explicit::{Explicit, MatrixShape}; // generating value is the matrix itself
pub use left_matrix_scramble::{LeftMatrixScramble, ScrambleSize}; // S_k * C_k over a base net
pub use polynomial_net::{Polynomial, laurent_digits}; // Hankel matrices of q(z)/P(z)
pub use primitive_polynomials::{MAX_SOBOL_DIMENSION, primitive_polynomial};
pub use sobol::{Sobol, SobolSize}; // direction numbers over the built-in primitive polynomials
