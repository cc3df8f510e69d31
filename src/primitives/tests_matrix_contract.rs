// Property tests for the Matrix algebra and the text format.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"

use super::*;
use proptest::prelude::*;

fn arb_matrix(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim)
        .prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(-1e6f64..1e6, rows * cols)
                .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("len == rows*cols"))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Transpose involution: (A^T)^T = A
    #[test]
    fn prop_transpose_involution(a in arb_matrix(8)) {
        let att = a.transpose().transpose();
        prop_assert_eq!(att, a);
    }

    /// Transpose swaps shape: (m x n)^T = (n x m)
    #[test]
    fn prop_transpose_swaps_shape(a in arb_matrix(8)) {
        let (rows, cols) = a.shape();
        prop_assert_eq!(a.transpose().shape(), (cols, rows));
    }

    /// Transpose is a total permutation: every cell lands in its slot.
    #[test]
    fn prop_transpose_moves_every_cell(a in arb_matrix(8)) {
        let t = a.transpose();
        for i in 0..a.height() {
            for j in 0..a.width() {
                prop_assert_eq!(t.get(j, i), a.get(i, j));
            }
        }
    }

    /// Matmul shape: (m x k) * (k x n) = (m x n)
    #[test]
    fn prop_dot_shape(m in 1..=6usize, k in 1..=6usize, n in 1..=6usize) {
        let a = Matrix::new(m, k, 1.0);
        let b = Matrix::new(k, n, 1.0);
        let c = a.dot(&b).expect("inner dims agree");
        prop_assert_eq!(c.shape(), (m, n));
        // all-ones inputs make each entry the inner dimension
        prop_assert!(c.as_slice().iter().all(|&v| v == k as f64));
    }

    /// Identity matmul: A * I = A
    #[test]
    fn prop_dot_identity(a in arb_matrix(6)) {
        let eye = Matrix::eye(a.width());
        let result = a.dot(&eye).expect("inner dims agree");
        prop_assert_eq!(result, a);
    }

    /// (A + B) - B = A for exactly representable values.
    #[test]
    fn prop_add_then_sub_restores(
        rows in 1..=6usize,
        cols in 1..=6usize,
        seed in any::<u32>(),
    ) {
        // small integer-valued entries so the law holds exactly
        let a_data: Vec<f64> = (0..rows * cols)
            .map(|i| f64::from((seed.wrapping_add(i as u32 * 7919)) % 100))
            .collect();
        let b_data: Vec<f64> = (0..rows * cols)
            .map(|i| f64::from((seed.wrapping_mul(31).wrapping_add(i as u32)) % 100))
            .collect();
        let a = Matrix::from_vec(rows, cols, a_data).expect("len == rows*cols");
        let b = Matrix::from_vec(rows, cols, b_data).expect("len == rows*cols");
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    /// Hadamard product is commutative.
    #[test]
    fn prop_hadamard_commutes(rows in 1..=6usize, cols in 1..=6usize, seed in any::<u32>()) {
        let a_data: Vec<f64> = (0..rows * cols)
            .map(|i| f64::from((seed.wrapping_add(i as u32 * 13)) % 50))
            .collect();
        let b_data: Vec<f64> = (0..rows * cols)
            .map(|i| f64::from((seed.wrapping_mul(17).wrapping_add(i as u32)) % 50))
            .collect();
        let a = Matrix::from_vec(rows, cols, a_data).expect("len == rows*cols");
        let b = Matrix::from_vec(rows, cols, b_data).expect("len == rows*cols");
        prop_assert_eq!(&a * &b, &b * &a);
    }

    /// Scaling by one is the identity.
    #[test]
    fn prop_scale_by_one(a in arb_matrix(8)) {
        prop_assert_eq!(&a * 1.0, a);
    }

    /// Text round trip: parse(display(A)) == A.
    #[test]
    fn prop_text_round_trip(a in arb_matrix(8)) {
        let parsed: Matrix = a.to_string().parse().expect("own output is well-formed");
        prop_assert_eq!(parsed, a);
    }
}
