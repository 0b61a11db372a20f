//! Gaussian elimination with partial pivoting
//!
//! Forward elimination and back substitution over an augmented matrix,
//! backing both linear solving and inversion. Pivots are chosen by
//! maximum magnitude in the column so that a nonzero-but-tiny leading
//! entry does not amplify rounding error, and a column with no usable
//! pivot reports [`TesseraError::Singular`] rather than a silently
//! garbage result.

use tracing::trace;

use tessera_core::{Result, TesseraError, Vector};

use crate::types::Matrix;

impl Matrix {
    /// Reduces the matrix to row echelon form in place.
    ///
    /// Requires at least as many columns as rows, which holds for every
    /// augmented system this crate builds. For each pivot column the row
    /// with the largest-magnitude entry on or below the diagonal is
    /// swapped up, then the rows below are cleared.
    pub fn forward_eliminate(&mut self) -> Result<()> {
        let (m, n) = self.dims();
        if n < m {
            return Err(TesseraError::invalid_shape("forward elimination", (m, n)));
        }

        for i in 0..m {
            let pivot_row = self.pivot_row(i)?;
            if pivot_row != i {
                trace!(column = i, row = pivot_row, "pivot swap");
                self.swap_rows(i, pivot_row)?;
            }
            let pivot = self[(i, i)];
            for j in i + 1..m {
                let factor = -self[(j, i)] / pivot;
                if factor != 0.0 {
                    self.add_scaled_row(j, i, factor)?;
                }
            }
        }
        Ok(())
    }

    /// Finds the row in i..m whose entry in column i has the largest
    /// magnitude, or reports the column as pivotless.
    fn pivot_row(&self, i: usize) -> Result<usize> {
        let m = self.rows();
        let mut best = i;
        let mut best_mag = self[(i, i)].abs();
        for j in i + 1..m {
            let mag = self[(j, i)].abs();
            if mag > best_mag {
                best = j;
                best_mag = mag;
            }
        }
        if best_mag == 0.0 {
            return Err(TesseraError::Singular { column: i });
        }
        Ok(best)
    }

    /// Back-substitutes a row-echelon matrix in place, leaving each pivot
    /// equal to one and each pivot column otherwise zero.
    pub fn back_substitute(&mut self) -> Result<()> {
        let m = self.rows();
        for i in (0..m).rev() {
            let pivot = self[(i, i)];
            if pivot == 0.0 {
                return Err(TesseraError::Singular { column: i });
            }
            self.scale_row(i, 1.0 / pivot)?;
            for j in 0..i {
                let factor = -self[(j, i)];
                if factor != 0.0 {
                    self.add_scaled_row(j, i, factor)?;
                }
            }
        }
        Ok(())
    }

    /// Solves the linear system self * x = rhs.
    ///
    /// The coefficient matrix must be square and the right-hand side must
    /// have one entry per row. The receiver is not modified; elimination
    /// runs on an augmented copy.
    pub fn solve(&self, rhs: &Vector) -> Result<Vector> {
        let (m, n) = self.dims();
        self.check_square("solve")?;
        if rhs.len() != m {
            return Err(TesseraError::LengthMismatch {
                left: m,
                right: rhs.len(),
            });
        }

        let mut aug = self.join(&Matrix::column_matrix(rhs))?;
        aug.forward_eliminate()?;
        aug.back_substitute()?;
        aug.col(n)
    }

    /// Computes the inverse by eliminating the augmented block [self | I].
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.check_square("inverse")?;
        let mut aug = self.join(&Matrix::identity(n))?;
        aug.forward_eliminate()?;
        aug.back_substitute()?;
        Ok(Matrix::from_fn(n, n, |i, j| aug[(i, j + n)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_two_by_two() {
        let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let x = a.solve(&Vector::from(vec![5.0, 6.0])).unwrap();
        assert!(x.approx_eq(&Vector::from(vec![-4.0, 4.5]), 1e-12));
    }

    #[test]
    fn test_solve_freezing_boiling() {
        // Fit f = c * a + b through (0, 32) and (100, 212).
        let a = Matrix::new(2, 2, vec![0.0, 1.0, 100.0, 1.0]).unwrap();
        let x = a.solve(&Vector::from(vec![32.0, 212.0])).unwrap();
        assert!(x.approx_eq(&Vector::from(vec![1.8, 32.0]), 1e-12));
    }

    #[test]
    fn test_solve_residual_is_small() {
        let a = Matrix::new(
            3,
            3,
            vec![2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        )
        .unwrap();
        let b = Vector::from(vec![8.0, -11.0, -3.0]);
        let x = a.solve(&b).unwrap();
        let ax = a
            .matmul(&Matrix::column_matrix(&x))
            .unwrap()
            .to_vector()
            .unwrap();
        assert!(ax.approx_eq(&b, 1e-9));
    }

    #[test]
    fn test_solve_requires_square() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            a.solve(&Vector::from(vec![1.0, 2.0])),
            Err(TesseraError::invalid_shape("solve", (2, 3))),
        );
    }

    #[test]
    fn test_solve_rhs_length_checked() {
        let a = Matrix::identity(3);
        assert_eq!(
            a.solve(&Vector::from(vec![1.0, 2.0])),
            Err(TesseraError::LengthMismatch { left: 3, right: 2 }),
        );
    }

    #[test]
    fn test_solve_singular_system() {
        // Second row is twice the first.
        let a = Matrix::new(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(
            a.solve(&Vector::from(vec![1.0, 2.0])),
            Err(TesseraError::Singular { column: 1 }),
        );
    }

    #[test]
    fn test_solve_zero_leading_entry() {
        // Forces a pivot swap on the first column.
        let a = Matrix::new(2, 2, vec![0.0, 2.0, 3.0, 1.0]).unwrap();
        let x = a.solve(&Vector::from(vec![4.0, 5.0])).unwrap();
        assert!(x.approx_eq(&Vector::from(vec![1.0, 2.0]), 1e-12));
    }

    #[test]
    fn test_inverse_times_self_is_identity() {
        let a = Matrix::new(
            3,
            3,
            vec![4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0],
        )
        .unwrap();
        let inv = a.inverse().unwrap();
        assert!(a.matmul(&inv).unwrap().approx_eq(&Matrix::identity(3), 1e-9));
        assert!(inv.matmul(&a).unwrap().approx_eq(&Matrix::identity(3), 1e-9));
    }

    #[test]
    fn test_inverse_two_by_two_exact() {
        let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let inv = a.inverse().unwrap();
        let expected = Matrix::new(2, 2, vec![-2.0, 1.0, 1.5, -0.5]).unwrap();
        assert!(inv.approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_inverse_of_zero_matrix_is_singular() {
        assert_eq!(
            Matrix::zeros(2, 2).inverse(),
            Err(TesseraError::Singular { column: 0 }),
        );
    }

    #[test]
    fn test_inverse_requires_square() {
        assert_eq!(
            Matrix::zeros(2, 3).inverse(),
            Err(TesseraError::invalid_shape("inverse", (2, 3))),
        );
    }

    #[test]
    fn test_inverse_does_not_mutate_receiver() {
        let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let copy = a.clone();
        let _ = a.inverse().unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_inverse_against_nalgebra() {
        let data = vec![
            2.0, -1.0, 0.0, 1.0, //
            3.0, 2.0, 1.0, -2.0, //
            0.0, 1.0, 4.0, 2.0, //
            1.0, 0.0, -1.0, 3.0,
        ];
        let a = Matrix::new(4, 4, data.clone()).unwrap();
        let inv = a.inverse().unwrap();

        let na = nalgebra::DMatrix::from_row_slice(4, 4, &data);
        let na_inv = na.try_inverse().unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv[(i, j)] - na_inv[(i, j)]).abs() < 1e-9);
            }
        }
    }
}
