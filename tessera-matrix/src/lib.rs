//! Tessera Matrix - Dense Matrix Algebra
//!
//! Dense row-major matrices over f64 for Tessera:
//! - Construction (new, from_rows, from_fn, zeros, identity, row/column matrices)
//! - Elementary operations (add, sub, scale, transpose, row/column surgery, join)
//! - Multiplication (pairwise matmul, minimum-cost chain planning)
//! - Elimination (row echelon, back substitution, solve, inverse)
//! - Determinants (cofactor expansion, pivot product)
//! - Integer powers (binary exponentiation, negative via inverse)
//!
//! Every fallible operation reports a [`TesseraError`] instead of
//! panicking, and every operation that returns a new matrix leaves its
//! inputs untouched.

mod chain;
mod det;
mod ops;
mod power;
mod solve;
mod types;

pub use chain::{multiply_chain, ChainPlan};
pub use types::Matrix;

pub use tessera_core::{Result, TesseraError, Vector};

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end: plan a chain, solve against its product, recover the
    // right-hand side.
    #[test]
    fn test_chain_solve_round() {
        let mats = vec![
            Matrix::new(2, 2, vec![2.0, 1.0, 1.0, 3.0]).unwrap(),
            Matrix::new(2, 2, vec![1.0, 0.0, 1.0, 1.0]).unwrap(),
            Matrix::new(2, 2, vec![3.0, 1.0, 0.0, 2.0]).unwrap(),
        ];
        let a = multiply_chain(&mats).unwrap();
        let b = Vector::from(vec![7.0, -2.0]);
        let x = a.solve(&b).unwrap();
        let back = a
            .matmul(&Matrix::column_matrix(&x))
            .unwrap()
            .to_vector()
            .unwrap();
        assert!(back.approx_eq(&b, 1e-9));
    }

    #[test]
    fn test_determinant_of_inverse() {
        let a = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let da = a.determinant().unwrap();
        let di = a.inverse().unwrap().determinant().unwrap();
        assert!((da * di - 1.0).abs() < 1e-12);
    }
}
