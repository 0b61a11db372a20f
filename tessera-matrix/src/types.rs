//! Core dense matrix type
//!
//! Matrices are stored in row-major order in a single flat buffer, so the
//! row-length invariant holds by construction: a `Matrix` cannot hold
//! ragged rows. Constructors that accept caller data validate it and
//! return `Construction` errors instead.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use tessera_core::{Result, TesseraError, Vector};

/// An m-by-n matrix of f64 entries in row-major order.
///
/// A matrix exclusively owns its storage; `Clone` is a deep copy with no
/// aliasing between the copy and the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Generates an m-by-n matrix with entries defined by a generating
    /// function f(i, j).
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Creates an m-by-n matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(TesseraError::Construction(format!(
                "{}x{} matrix requires {} entries, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of rows. All rows must have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TesseraError::Construction(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: m,
            cols: n,
        })
    }

    /// An m-by-n matrix of zeroes.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// The n-by-n identity matrix (Kronecker-delta generator).
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Converts a vector to a 1-by-n row matrix.
    pub fn row_matrix(v: &Vector) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            rows: 1,
            cols: v.len(),
        }
    }

    /// Converts a vector to an n-by-1 column matrix.
    pub fn column_matrix(v: &Vector) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            rows: v.len(),
            cols: 1,
        }
    }

    /// Returns (number of rows, number of columns).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at (i, j), if in bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Sets the entry at (i, j).
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        self.check_row(i)?;
        self.check_col(j)?;
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Row i as a vector.
    pub fn row(&self, i: usize) -> Result<Vector> {
        self.check_row(i)?;
        Ok(self.row_slice(i).iter().copied().collect())
    }

    /// Column j as a vector.
    pub fn col(&self, j: usize) -> Result<Vector> {
        self.check_col(j)?;
        Ok((0..self.rows).map(|i| self[(i, j)]).collect())
    }

    /// Converts a 1-by-n or n-by-1 matrix to a vector.
    pub fn to_vector(&self) -> Result<Vector> {
        if self.rows != 1 && self.cols != 1 {
            return Err(TesseraError::invalid_shape("vector conversion", self.dims()));
        }
        Ok(self.data.iter().copied().collect())
    }

    /// Total order: lexicographic comparison of entries in row-major
    /// order. Unlike vectors, matrices of different dimensions do not
    /// compare.
    pub fn compare(&self, other: &Matrix) -> Result<Ordering> {
        self.check_same_dims(other)?;
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            if a < b {
                return Ok(Ordering::Less);
            }
            if b < a {
                return Ok(Ordering::Greater);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Entrywise comparison within an absolute tolerance. Matrices of
    /// different dimensions are never approximately equal.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    pub(crate) fn row_slice(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub(crate) fn data(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.rows {
            return Err(TesseraError::IndexOutOfBounds {
                index: i,
                len: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, j: usize) -> Result<()> {
        if j >= self.cols {
            return Err(TesseraError::IndexOutOfBounds {
                index: j,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_same_dims(&self, other: &Matrix) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(TesseraError::dim_mismatch(self.dims(), other.dims()));
        }
        Ok(())
    }

    /// Errors unless the matrix is square, returning the side length.
    pub(crate) fn check_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(TesseraError::invalid_shape(op, self.dims()));
        }
        Ok(self.rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
