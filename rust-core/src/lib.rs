//! Quasi-Monte Carlo point set library
//!
//! This library provides the indexing and construction layer shared by lattice rules and
//! digital nets in base 2: compressed and strided index views over integration and polynomial
//! lattices, and digital nets whose dimension grows one coordinate at a time.

pub mod config;
pub mod interfaces;
pub mod lattice;
pub mod net;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_construction_tags() {
        use crate::interfaces::NetConstructionKind;

        assert!(NetConstructionKind::Sobol.is_sequence_viewable());
        assert!(!NetConstructionKind::Polynomial.is_sequence_viewable());
        assert!(!NetConstructionKind::Explicit.is_sequence_viewable());
        assert!(!NetConstructionKind::LeftMatrixScramble.is_sequence_viewable());
        assert_eq!("lms".parse::<NetConstructionKind>().unwrap(), NetConstructionKind::LeftMatrixScramble);
        assert_eq!(NetConstructionKind::Sobol.to_string(), "sobol");
        assert!("halton".parse::<NetConstructionKind>().is_err());
    }

    #[test]
    fn test_runtime_tags() {
        use crate::interfaces::{Compress, LatticeKind, OutputStyle};

        assert_eq!("Symmetric".parse::<Compress>().unwrap(), Compress::Symmetric);
        assert_eq!(Compress::None.to_string(), "none");
        assert!("mirror".parse::<Compress>().is_err());
        assert_eq!(LatticeKind::Integration.to_string(), "ordinary");
        assert_eq!("net".parse::<OutputStyle>().unwrap(), OutputStyle::Net);
        assert_eq!(OutputStyle::default(), OutputStyle::Terminal);
    }
}
