// Constants

// Output
pub const OUTPUT_DIGITS: usize = 31; // Binary digits per column in the machine-readable net dump

// Limits
pub const MAX_POLYNOMIAL_DEGREE: usize = 63; // GF(2) polynomials are packed into a u64
pub const MAX_NET_COLUMNS: usize = 63; // 2^cols points must fit in a u64
pub const MAX_NET_ROWS: usize = 64; // Columns are written as u64 integers
