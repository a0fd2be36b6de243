// Lattice module: index views over the points of integration and polynomial lattice rules
// This module provides the ring arithmetic, compression policies and storage views used to walk lattice coordinates

// ======================== MODULE DECLARATIONS ========================
pub mod compression;
pub mod polynomial;
pub mod ring;
pub mod size_param;
pub mod storage;


// ======================== RING ARITHMETIC ========================
pub use polynomial::Gf2Poly; // struct - polynomial over GF(2), packed into a u64 (bit k = coefficient of z^k)
// Gf2Poly impl methods:
//   from_bits(bits: u64) -> Self                                  - polynomial whose coefficients are the bits of an index
//   from_coefficients(coefficients: &[u8]) -> Result<Self>        - coefficients listed from z^0 upwards
//   degree(&self) -> Option<usize>                                - degree, None for the zero polynomial
//   rem(&self, modulus: &Gf2Poly) -> Gf2Poly                      - remainder of the division by modulus
//   mul_mod(&self, other: &Gf2Poly, modulus: &Gf2Poly) -> Gf2Poly - product reduced modulo modulus

pub use ring::{
    LatticeRing,       // trait - modulus, multiplication and index <-> element conversion of a lattice ring
    IntegerLattice,    // struct - integers modulo n
    PolynomialLattice, // struct - GF(2)[z] modulo P(z)
};

// ======================== SIZE PARAMETERS ========================
pub use size_param::SizeParam; // struct - modulus and number of points of a lattice rule
// SizeParam impl methods:
//   new(modulus: L::Element) -> Result<Self>                      - validates the modulus
//   integration(num_points: u64) -> Result<SizeParam<IntegerLattice>>
//   polynomial(modulus: Gf2Poly) -> Result<SizeParam<PolynomialLattice>>
//   modulus(&self) -> &L::Element
//   num_points(&self) -> u64

// ======================== COMPRESSION ========================
pub use compression::{
    Compression,          // trait - stateless index folding (size, compress_index)
    NoCompression,        // struct - identity folding
    SymmetricCompression, // struct - folds i and n - i together, n/2 + 1 representatives
};

// ======================== STORAGE & INDEX VIEWS ========================
pub use storage::{
    Storage,   // struct - flat storage of a lattice-indexed vector, compression chosen at the type level
    Unpermute, // struct - identity view; size() is the compressed size
    Stride,    // struct - multiplicative stride view; size() is the uncompressed point count
};
// Storage impl methods:
//   new(size_param: SizeParam<L>) -> Self                         - flat storage, basic per-level order
//   with_order(size_param, order: PerLevelOrder) -> Result<Self>  - rejects the cyclic order
//   num_points(&self) -> u64                                      - uncompressed number of points
//   virtual_size(&self) -> u64                                    - number of compressed indices
//   unpermute(&self) -> Unpermute<L, C>
//   stride(&self, stride: L::Element) -> Stride<L, C>
