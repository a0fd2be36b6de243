#[cfg(test)]
mod _tests_generating_matrix {
    use super::super::generating_matrix::{GeneratingMatrix, output_digits};

    fn pascal_3() -> GeneratingMatrix {
        GeneratingMatrix::from_rows(&[vec![1, 1, 1], vec![0, 1, 0], vec![0, 0, 1]]).unwrap()
    }

    #[test]
    fn test_shapes() {
        let zeros = GeneratingMatrix::zeros(2, 5);
        assert_eq!(zeros.num_rows(), 2);
        assert_eq!(zeros.num_cols(), 5);
        assert_eq!(zeros.shape(), (2, 5));

        let identity = GeneratingMatrix::identity(4);
        assert!(identity.get(2, 2));
        assert!(!identity.get(2, 3));
        assert!(identity.is_lower_unitriangular());
    }

    #[test]
    fn test_from_rows_validation() {
        let ragged = GeneratingMatrix::from_rows(&[vec![1, 0], vec![1]]);
        assert!(ragged.is_err());

        let non_binary = GeneratingMatrix::from_rows(&[vec![1, 2]]);
        assert!(non_binary.unwrap_err().to_string().contains("non-binary"));

        let empty = GeneratingMatrix::from_rows(&[]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        GeneratingMatrix::identity(3).get(3, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(pascal_3().to_string(), "1 1 1\n0 1 0\n0 0 1");
    }

    #[test]
    fn test_format_to_columns_reverse() {
        // Row 0 is the most significant of the 31 output digits
        assert_eq!(
            GeneratingMatrix::identity(3).format_to_columns_reverse(),
            "1073741824 536870912 268435456"
        );
        assert_eq!(
            pascal_3().format_to_columns_reverse(),
            "1073741824 1610612736 1342177280"
        );
        assert_eq!(pascal_3().column_as_integer(2, 3), 0b101);
    }

    #[test]
    fn test_gf2_mul() {
        let pascal = pascal_3();
        // The binary Pascal matrix is an involution
        assert_eq!(pascal.gf2_mul(&pascal), GeneratingMatrix::identity(3));

        let identity = GeneratingMatrix::identity(3);
        assert_eq!(identity.gf2_mul(&pascal), pascal);
    }

    #[test]
    #[should_panic(expected = "Cannot multiply")]
    fn test_gf2_mul_shape_mismatch() {
        GeneratingMatrix::identity(3).gf2_mul(&GeneratingMatrix::identity(2));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&pascal_3()).unwrap();
        let back: GeneratingMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pascal_3());
    }

    #[test]
    fn test_deserialize_rejects_non_binary_entries() {
        let json = serde_json::to_string(&GeneratingMatrix::identity(2)).unwrap();
        let corrupted = json.replace("[1,0,0,1]", "[2,0,0,1]");
        assert_ne!(json, corrupted);
        assert!(serde_json::from_str::<GeneratingMatrix>(&corrupted).is_err());
    }

    #[test]
    fn test_output_digits() {
        assert_eq!(output_digits(0), 31);
        assert_eq!(output_digits(31), 31);
        assert_eq!(output_digits(40), 40);
    }

    #[test]
    fn test_columns_reverse_keeps_every_row() {
        // Only the last of 40 rows is set
        let matrix = GeneratingMatrix::from_fn(40, 2, |i, j| i == 39 && j == 0);
        assert_eq!(matrix.format_to_columns_reverse(), "1 0");
    }

    #[test]
    #[should_panic(expected = "Cannot pack 65 binary digits")]
    fn test_column_as_integer_digit_limit() {
        GeneratingMatrix::identity(2).column_as_integer(0, 65);
    }
}
