/// Primitive polynomials over GF(2) in the order used to assign them to Sobol
/// coordinates (coordinate `k >= 1` uses entry `k - 1`).
///
/// Each entry is `(s, a)`: the polynomial
/// `z^s + a_1 z^(s-1) + ... + a_(s-1) z + 1`, where `a_1 ... a_(s-1)` are the
/// binary digits of `a`, most significant first.
pub const PRIMITIVE_POLYNOMIALS: [(u32, u64); 100] = [
    // degree 1
    (1, 0),
    // degree 2
    (2, 1),
    // degree 3
    (3, 1), (3, 2),
    // degree 4
    (4, 1), (4, 4),
    // degree 5
    (5, 2), (5, 4), (5, 7), (5, 11), (5, 13), (5, 14),
    // degree 6
    (6, 1), (6, 13), (6, 16), (6, 19), (6, 22), (6, 25),
    // degree 7
    (7, 1), (7, 4), (7, 7), (7, 8), (7, 14), (7, 19), (7, 21), (7, 28),
    (7, 31), (7, 32), (7, 37), (7, 41), (7, 42), (7, 50), (7, 55), (7, 56),
    (7, 59), (7, 62),
    // degree 8
    (8, 14), (8, 21), (8, 22), (8, 38), (8, 47), (8, 49), (8, 50), (8, 52),
    (8, 56), (8, 67), (8, 70), (8, 84), (8, 97), (8, 103), (8, 115), (8, 122),
    // degree 9
    (9, 8), (9, 13), (9, 16), (9, 22), (9, 25), (9, 44), (9, 47), (9, 52),
    (9, 55), (9, 59), (9, 62), (9, 67), (9, 74), (9, 81), (9, 82), (9, 87),
    (9, 91), (9, 94), (9, 103), (9, 104), (9, 109), (9, 122), (9, 124), (9, 137),
    (9, 138), (9, 143), (9, 145), (9, 152), (9, 157), (9, 167), (9, 173), (9, 176),
    (9, 181), (9, 182), (9, 185), (9, 191), (9, 194), (9, 199), (9, 218), (9, 220),
    (9, 227), (9, 229), (9, 230), (9, 234), (9, 236), (9, 241), (9, 244), (9, 253),
];

/// Largest dimension of a Sobol net supported by the built-in table.
pub const MAX_SOBOL_DIMENSION: usize = PRIMITIVE_POLYNOMIALS.len() + 1;

/// Degree and inner coefficients of the primitive polynomial of Sobol coordinate `coord >= 1`.
pub fn primitive_polynomial(coord: usize) -> Option<(u32, u64)> {
    coord
        .checked_sub(1)
        .and_then(|k| PRIMITIVE_POLYNOMIALS.get(k))
        .copied()
}
