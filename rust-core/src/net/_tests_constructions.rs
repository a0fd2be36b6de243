#[cfg(test)]
mod _tests_constructions {
    use std::sync::Arc;

    use super::super::abstract_net::AbstractDigitalNet;
    use super::super::construction::NetConstruction;
    use super::super::digital_net::DigitalNet;
    use super::super::explicit::{Explicit, MatrixShape};
    use super::super::generating_matrix::GeneratingMatrix;
    use super::super::left_matrix_scramble::{LeftMatrixScramble, ScrambleSize};
    use super::super::polynomial_net::{Polynomial, laurent_digits};
    use super::super::primitive_polynomials::{MAX_SOBOL_DIMENSION, PRIMITIVE_POLYNOMIALS, primitive_polynomial};
    use super::super::sobol::{Sobol, SobolSize};
    use crate::lattice::Gf2Poly;

    fn rows(rows: &[&[u8]]) -> GeneratingMatrix {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        GeneratingMatrix::from_rows(&rows).unwrap()
    }

    // ==================== Sobol ====================

    #[test]
    fn test_primitive_polynomial_table() {
        assert_eq!(primitive_polynomial(0), None);
        assert_eq!(primitive_polynomial(1), Some((1, 0)));
        assert_eq!(primitive_polynomial(2), Some((2, 1)));
        assert_eq!(primitive_polynomial(MAX_SOBOL_DIMENSION), None);

        // Degrees never decrease along the table
        assert!(PRIMITIVE_POLYNOMIALS.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_sobol_first_coordinate_is_identity() {
        let size = SobolSize::new(5).unwrap();
        let matrix = Sobol::create_generating_matrix(&vec![], &size, 0);
        assert_eq!(matrix, GeneratingMatrix::identity(5));
    }

    #[test]
    fn test_sobol_second_coordinate_is_pascal() {
        let size = SobolSize::new(4).unwrap();
        let matrix = Sobol::create_generating_matrix(&vec![1], &size, 1);
        let expected = rows(&[&[1, 1, 1, 1], &[0, 1, 0, 1], &[0, 0, 1, 1], &[0, 0, 0, 1]]);
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_sobol_recurrence() {
        // z^2 + z + 1 with m = (1, 3) continues with m_3 = 3, m_4 = 9
        let size = SobolSize::new(4).unwrap();
        let matrix = Sobol::create_generating_matrix(&vec![1, 3], &size, 2);
        let expected = rows(&[&[1, 1, 0, 1], &[0, 1, 1, 0], &[0, 0, 1, 0], &[0, 0, 0, 1]]);
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_sobol_fewer_columns_than_degree() {
        let size = SobolSize::new(2).unwrap();
        let matrix = Sobol::create_generating_matrix(&vec![1, 3, 7], &size, 3);
        assert_eq!(matrix, rows(&[&[1, 1], &[0, 1]]));
    }

    #[test]
    fn test_sobol_gen_value_validation() {
        let size = SobolSize::new(8).unwrap();
        assert!(Sobol::check_gen_value(&vec![], &size, 0).is_ok());
        assert!(Sobol::check_gen_value(&vec![1, 3], &size, 2).is_ok());

        // Wrong count, even number, too large
        assert!(Sobol::check_gen_value(&vec![1], &size, 2).is_err());
        assert!(Sobol::check_gen_value(&vec![1, 2], &size, 2).is_err());
        assert!(Sobol::check_gen_value(&vec![1, 5], &size, 2).is_err());

        let err = Sobol::check_gen_value(&vec![1], &size, MAX_SOBOL_DIMENSION).unwrap_err();
        assert!(err.to_string().contains("limited to dimension"));
    }

    #[test]
    fn test_sobol_size_limit() {
        assert!(SobolSize::new(63).is_ok());
        assert!(SobolSize::new(64).is_err());
    }

    #[test]
    fn test_size_parameters_deserialize_through_constructors() {
        let size: SobolSize = serde_json::from_str(r#"{"num_cols":12}"#).unwrap();
        assert_eq!(size.num_cols(), 12);
        assert!(serde_json::from_str::<SobolSize>(r#"{"num_cols":64}"#).is_err());

        let shape: MatrixShape = serde_json::from_str(r#"{"num_rows":5,"num_cols":3}"#).unwrap();
        assert_eq!(shape, MatrixShape::new(5, 3).unwrap());
        assert!(serde_json::from_str::<MatrixShape>(r#"{"num_rows":65,"num_cols":3}"#).is_err());
        assert!(serde_json::from_str::<MatrixShape>(r#"{"num_rows":5,"num_cols":64}"#).is_err());
    }

    // ==================== Polynomial ====================

    #[test]
    fn test_laurent_digits() {
        // 1 / (z^3 + z + 1) = z^-3 + z^-5 + ...
        let modulus = Gf2Poly::from_bits(0b1011);
        let digits = laurent_digits(&Gf2Poly::ONE, &modulus, 5);
        assert_eq!(digits, vec![false, false, true, false, true]);
        assert!(laurent_digits(&Gf2Poly::ONE, &Gf2Poly::ZERO, 5).is_empty());
    }

    #[test]
    fn test_polynomial_matrix_is_hankel() {
        let modulus = Gf2Poly::from_bits(0b1011);
        assert_eq!(Polynomial::num_rows(&modulus), 3);
        assert_eq!(Polynomial::num_cols(&modulus), 3);

        let matrix = Polynomial::create_generating_matrix(&Gf2Poly::ONE, &modulus, 0);
        assert_eq!(matrix, rows(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 1]]));
    }

    #[test]
    fn test_polynomial_matrices_are_symmetric() {
        let modulus = Gf2Poly::from_bits(0b100101); // z^5 + z^2 + 1
        for bits in 1..32 {
            let matrix = Polynomial::create_generating_matrix(&Gf2Poly::from_bits(bits), &modulus, 0);
            for i in 0..5 {
                for j in 0..5 {
                    assert_eq!(matrix.get(i, j), matrix.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_polynomial_gen_value_validation() {
        let modulus = Gf2Poly::from_bits(0b1011);
        assert!(Polynomial::check_gen_value(&Gf2Poly::from_bits(0b110), &modulus, 0).is_ok());
        assert!(Polynomial::check_gen_value(&Gf2Poly::ZERO, &modulus, 0).is_err());
        assert!(Polynomial::check_gen_value(&Gf2Poly::from_bits(0b1000), &modulus, 0).is_err());
        assert!(Polynomial::check_gen_value(&Gf2Poly::ONE, &Gf2Poly::ZERO, 0).is_err());
    }

    // ==================== Explicit ====================

    #[test]
    fn test_explicit_matrices_are_the_values() {
        let shape = MatrixShape::new(2, 3).unwrap();
        let a = rows(&[&[1, 0, 1], &[0, 1, 1]]);
        let b = rows(&[&[0, 0, 1], &[1, 1, 0]]);
        let net = DigitalNet::<Explicit>::new(shape, vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(net.generating_matrix(0), &a);
        assert_eq!(net.generating_matrix(1), &b);
        assert!(!net.is_sequence_viewable());
    }

    #[test]
    fn test_explicit_shape_mismatch() {
        let shape = MatrixShape::new(2, 3).unwrap();
        let result = DigitalNet::<Explicit>::new(shape, vec![GeneratingMatrix::identity(3)]);
        assert!(result.is_err());
        if let Err(err) = result {
            let message = format!("{:#}", err);
            assert!(message.contains("coordinate 0"), "got: {}", message);
            assert!(message.contains("expected 2x3"), "got: {}", message);
        }
    }

    // ==================== Left matrix scramble ====================

    fn sobol_base() -> Arc<dyn AbstractDigitalNet> {
        let size = SobolSize::new(3).unwrap();
        Arc::new(DigitalNet::<Sobol>::new(size, vec![vec![], vec![1]]).unwrap())
    }

    fn scrambling_matrix() -> GeneratingMatrix {
        rows(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 1], &[1, 0, 1]])
    }

    #[test]
    fn test_scramble_size_validation() {
        assert!(ScrambleSize::new(sobol_base(), 2).is_err());
        assert!(ScrambleSize::new(sobol_base(), 65).is_err());
        assert!(ScrambleSize::new(sobol_base(), 64).is_ok());
        let size = ScrambleSize::new(sobol_base(), 4).unwrap();
        assert_eq!(size.num_rows(), 4);
        assert_eq!(size.base().dimension(), 2);
    }

    #[test]
    fn test_left_matrix_scramble() {
        let size = ScrambleSize::new(sobol_base(), 4).unwrap();
        let net = DigitalNet::<LeftMatrixScramble>::new(size, vec![scrambling_matrix(), scrambling_matrix()]).unwrap();

        assert_eq!(net.num_rows(), 4);
        assert_eq!(net.num_cols(), 3);
        assert_eq!(net.num_points(), 8);

        // S * I = S
        assert_eq!(net.generating_matrix(0), &scrambling_matrix());
        // S * Pascal
        let expected = rows(&[&[1, 1, 1], &[1, 0, 1], &[0, 1, 1], &[1, 1, 0]]);
        assert_eq!(net.generating_matrix(1), &expected);
    }

    #[test]
    fn test_left_matrix_scramble_validation() {
        let size = ScrambleSize::new(sobol_base(), 4).unwrap();
        let net = DigitalNet::<LeftMatrixScramble>::new(size, vec![scrambling_matrix(), scrambling_matrix()]).unwrap();

        // The base net has only two coordinates
        assert!(net.append_new_coordinate(scrambling_matrix()).is_err());

        let size = ScrambleSize::new(sobol_base(), 4).unwrap();
        let upper = rows(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 1], &[0, 0, 0]]);
        assert!(DigitalNet::<LeftMatrixScramble>::new(size, vec![upper]).is_err());
    }
}
