//! Elementary matrix operations
//!
//! In-place operations mutate the receiver's storage directly and are not
//! safe for concurrent use without external synchronization. Pure
//! operations return freshly allocated matrices with no aliasing to their
//! inputs.

use tessera_core::{Result, TesseraError};

use crate::types::Matrix;

impl Matrix {
    /// Adds other to self, elementwise, in place.
    pub fn add_assign(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_dims(other)?;
        for (a, b) in self.data_mut().iter_mut().zip(other.data().iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts other from self, elementwise, in place.
    pub fn sub_assign(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_dims(other)?;
        for (a, b) in self.data_mut().iter_mut().zip(other.data().iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Returns self + other.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        let mut c = self.clone();
        c.add_assign(other)?;
        Ok(c)
    }

    /// Returns self - other.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        let mut c = self.clone();
        c.sub_assign(other)?;
        Ok(c)
    }

    /// Multiplies every entry by a in place.
    pub fn scale(&mut self, a: f64) {
        for x in self.data_mut() {
            *x *= a;
        }
    }

    /// Returns a * self.
    pub fn scaled(&self, a: f64) -> Matrix {
        let mut c = self.clone();
        c.scale(a);
        c
    }

    /// Returns self / a.
    pub fn scaled_div(&self, a: f64) -> Result<Matrix> {
        if a == 0.0 {
            return Err(TesseraError::DivisionByZero);
        }
        Ok(self.scaled(1.0 / a))
    }

    /// Returns the transpose, a new n-by-m matrix with (i, j) -> (j, i).
    pub fn transpose(&self) -> Matrix {
        let (m, n) = self.dims();
        Matrix::from_fn(n, m, |i, j| self[(j, i)])
    }

    /// Transposes in place. Square matrices swap entries across the
    /// diagonal without reallocating; rectangular ones replace their
    /// storage.
    pub fn transpose_assign(&mut self) {
        if self.is_square() {
            let n = self.cols();
            for i in 0..n {
                for j in i + 1..n {
                    self.data_mut().swap(i * n + j, j * n + i);
                }
            }
        } else {
            *self = self.transpose();
        }
    }

    /// Swaps rows i and j in place. No-op when i == j.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        if i == j {
            return Ok(());
        }
        let n = self.cols();
        let (i0, j0) = (i * n, j * n);
        for k in 0..n {
            self.data_mut().swap(i0 + k, j0 + k);
        }
        Ok(())
    }

    /// Swaps columns i and j in place. No-op when i == j.
    pub fn swap_cols(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_col(i)?;
        self.check_col(j)?;
        if i == j {
            return Ok(());
        }
        let n = self.cols();
        for k in 0..self.rows() {
            self.data_mut().swap(k * n + i, k * n + j);
        }
        Ok(())
    }

    /// Multiplies row i by a in place.
    pub fn scale_row(&mut self, i: usize, a: f64) -> Result<()> {
        self.check_row(i)?;
        let n = self.cols();
        for x in &mut self.data_mut()[i * n..(i + 1) * n] {
            *x *= a;
        }
        Ok(())
    }

    /// Multiplies column j by a in place.
    pub fn scale_col(&mut self, j: usize, a: f64) -> Result<()> {
        self.check_col(j)?;
        let n = self.cols();
        for i in 0..self.rows() {
            self.data_mut()[i * n + j] *= a;
        }
        Ok(())
    }

    /// Updates row i as row i + a * row j. Row j is unchanged. This is
    /// the primitive underlying Gaussian elimination.
    pub fn add_scaled_row(&mut self, i: usize, j: usize, a: f64) -> Result<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        let n = self.cols();
        let (i0, j0) = (i * n, j * n);
        for k in 0..n {
            let v = a * self.data()[j0 + k];
            self.data_mut()[i0 + k] += v;
        }
        Ok(())
    }

    /// Horizontal concatenation [self | other]. Row counts must agree.
    pub fn join(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows() != other.rows() {
            return Err(TesseraError::dim_mismatch(self.dims(), other.dims()));
        }
        let (m, na) = self.dims();
        let nb = other.cols();
        let mut data = Vec::with_capacity(m * (na + nb));
        for i in 0..m {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(other.row_slice(i));
        }
        Matrix::new(m, na + nb, data)
    }

    /// Returns a copy with row i removed.
    pub fn remove_row(&self, i: usize) -> Result<Matrix> {
        self.check_row(i)?;
        let (m, n) = self.dims();
        let mut data = Vec::with_capacity((m - 1) * n);
        for k in 0..m {
            if k != i {
                data.extend_from_slice(self.row_slice(k));
            }
        }
        Matrix::new(m - 1, n, data)
    }

    /// Returns a copy with column j removed.
    pub fn remove_col(&self, j: usize) -> Result<Matrix> {
        self.check_col(j)?;
        let (m, n) = self.dims();
        let mut data = Vec::with_capacity(m * (n - 1));
        for i in 0..m {
            let row = self.row_slice(i);
            data.extend_from_slice(&row[..j]);
            data.extend_from_slice(&row[j + 1..]);
        }
        Matrix::new(m, n - 1, data)
    }

    /// Sum of the main diagonal of a square matrix.
    pub fn trace(&self) -> Result<f64> {
        self.check_square("trace")?;
        Ok((0..self.rows()).map(|i| self[(i, i)]).sum())
    }

    /// Matrix product self * other by the direct triple loop. The left
    /// operand's column count must equal the right operand's row count.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(TesseraError::dim_mismatch(self.dims(), other.dims()));
        }
        let (m, p) = self.dims();
        let n = other.cols();
        let mut c = Matrix::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..p {
                    sum += self[(i, k)] * other[(k, j)];
                }
                c[(i, j)] = sum;
            }
        }
        Ok(c)
    }

    /// Number of scalar multiplications matmul would perform for this
    /// pairing.
    pub fn multiply_cost(&self, other: &Matrix) -> Result<usize> {
        if self.cols() != other.rows() {
            return Err(TesseraError::dim_mismatch(self.dims(), other.dims()));
        }
        Ok(self.rows() * self.cols() * other.cols())
    }
}
