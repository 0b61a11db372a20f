//! Determinants
//!
//! Two routes to the same scalar: cofactor expansion with closed forms
//! for the small orders, and a pivot-product reading of the elimination
//! in [`crate::solve`]. The cofactor route is exact in structure but
//! O(k!) in the order k, so anything beyond a handful of rows should
//! prefer [`Matrix::determinant_lu`].

use tessera_core::{Result, TesseraError};

use crate::types::Matrix;

impl Matrix {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Orders one through three use the closed forms directly; larger
    /// orders recurse on minors. Runs in O(k!) for order k.
    pub fn determinant(&self) -> Result<f64> {
        let k = self.check_square("determinant")?;
        match k {
            0 => Err(TesseraError::invalid_shape("determinant", (0, 0))),
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            3 => Ok(self[(0, 0)] * (self[(1, 1)] * self[(2, 2)] - self[(1, 2)] * self[(2, 1)])
                - self[(0, 1)] * (self[(1, 0)] * self[(2, 2)] - self[(1, 2)] * self[(2, 0)])
                + self[(0, 2)] * (self[(1, 0)] * self[(2, 1)] - self[(1, 1)] * self[(2, 0)])),
            _ => {
                let top_gone = self.remove_row(0)?;
                let mut det = 0.0;
                let mut sign = 1.0;
                for j in 0..k {
                    let entry = self[(0, j)];
                    if entry != 0.0 {
                        let minor = top_gone.remove_col(j)?;
                        det += sign * entry * minor.determinant()?;
                    }
                    sign = -sign;
                }
                Ok(det)
            }
        }
    }

    /// Determinant as the signed product of elimination pivots.
    ///
    /// Each row swap during pivoting flips the sign. A singular matrix
    /// yields zero rather than an error, since zero is its determinant.
    pub fn determinant_lu(&self) -> Result<f64> {
        let k = self.check_square("determinant")?;
        if k == 0 {
            return Err(TesseraError::invalid_shape("determinant", (0, 0)));
        }

        let mut work = self.clone();
        let mut sign = 1.0;
        for i in 0..k {
            let mut pivot_row = i;
            let mut best_mag = work[(i, i)].abs();
            for j in i + 1..k {
                let mag = work[(j, i)].abs();
                if mag > best_mag {
                    pivot_row = j;
                    best_mag = mag;
                }
            }
            if best_mag == 0.0 {
                return Ok(0.0);
            }
            if pivot_row != i {
                work.swap_rows(i, pivot_row)?;
                sign = -sign;
            }
            let pivot = work[(i, i)];
            for j in i + 1..k {
                let factor = -work[(j, i)] / pivot;
                if factor != 0.0 {
                    work.add_scaled_row(j, i, factor)?;
                }
            }
        }

        let mut det = sign;
        for i in 0..k {
            det *= work[(i, i)];
        }
        Ok(det)
    }
}
