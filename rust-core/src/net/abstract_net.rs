use std::sync::Arc;

use crate::interfaces::OutputStyle;
use crate::net::generating_matrix::{GeneratingMatrix, output_digits};

/// Digital net in base 2 seen as its vector of generating matrices.
///
/// This is the level at which figures of merit reason about nets: nothing here
/// depends on how the matrices were derived. Concrete nets are
/// [`DigitalNet`](super::DigitalNet)s.
pub trait AbstractDigitalNet: Send + Sync {
    /// Number of rows shared by every generating matrix.
    fn num_rows(&self) -> usize;

    /// Number of columns shared by every generating matrix.
    fn num_cols(&self) -> usize;

    /// Shared generating matrices, one per coordinate.
    fn generating_matrices(&self) -> &[Arc<GeneratingMatrix>];

    /// Textual description of the net.
    fn format(&self, style: OutputStyle, interlacing_factor: usize) -> String;

    /// Whether the net is the leading part of an infinite digital sequence.
    fn is_sequence_viewable(&self) -> bool;

    fn dimension(&self) -> usize {
        self.generating_matrices().len()
    }

    fn num_points(&self) -> u64 {
        1u64 << self.num_cols()
    }

    fn size(&self) -> u64 {
        self.num_points()
    }

    /// Generating matrix of coordinate `coord`; panics unless `coord < dimension()`.
    fn generating_matrix(&self, coord: usize) -> &GeneratingMatrix {
        match self.generating_matrices().get(coord) {
            Some(matrix) => matrix,
            None => panic!(
                "Coordinate {} out of range for a digital net of dimension {}",
                coord,
                self.dimension()
            ),
        }
    }

    fn get_generating_matrix(&self, coord: usize) -> Option<&GeneratingMatrix> {
        self.generating_matrices().get(coord).map(|m| m.as_ref())
    }
}

/// Construction-independent part of [`AbstractDigitalNet::format`].
pub fn format_net_description(net: &dyn AbstractDigitalNet, style: OutputStyle, interlacing_factor: usize) -> String {
    assert!(interlacing_factor >= 1, "Interlacing factor must be at least 1");
    let dimension = net.dimension();
    let mut res = String::new();
    match style {
        OutputStyle::Terminal => {
            res += &format!("{}  // Number of columns\n", net.num_cols());
            res += &format!("{}  // Number of rows\n", net.num_rows());
            res += &format!("{}  // Number of points\n", net.num_points());
            res += &format!("{}  // Dimension of points\n", dimension / interlacing_factor);
            if interlacing_factor > 1 {
                res += &format!("{}  // Interlacing factor\n", interlacing_factor);
                res += &format!(
                    "{}  // Number of components = interlacing factor x dimension\n",
                    dimension
                );
            }
        }
        OutputStyle::Net => {
            let k = net.num_cols();
            res += "# Parameters for a digital net in base 2\n";
            res += &format!("{}    # {} dimensions\n", dimension, dimension);
            if interlacing_factor > 1 {
                res += &format!("{}  // Interlacing factor\n", interlacing_factor);
                res += &format!(
                    "{}  // Number of components = interlacing factor x dimension\n",
                    dimension
                );
            }
            res += &format!("{}   # k = {},  n = 2^{} = {} points\n", k, k, k, net.num_points());
            let digits = output_digits(net.num_rows());
            res += &format!("{}   # r = {} binary output digits\n", digits, digits);
            if interlacing_factor == 1 {
                res += "# Columns of gen. matrices C_1,...,C_s, one matrix per line:\n";
            } else {
                res += "# Columns of gen. matrices C_1,...,C_{ds}, one matrix per line:\n";
            }
            let lines: Vec<String> = net
                .generating_matrices()
                .iter()
                .map(|matrix| matrix.format_to_columns_reverse())
                .collect();
            if lines.is_empty() {
                // No coordinate lines, so the dump ends on the column header
                res.pop();
            } else {
                res += &lines.join("\n");
            }
        }
    }
    res
}
