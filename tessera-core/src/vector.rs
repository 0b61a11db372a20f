//! Ordered n-tuples of real numbers
//!
//! `Vector` supplies row, column, and right-hand-side data for the matrix
//! crate. Operations that combine two vectors are length-checked and
//! return `Result`; operations on a single vector never fail except where
//! a zero divisor or zero magnitude is involved.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Result, TesseraError};

/// An ordered n-tuple of f64 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Generates a vector of dimension n with entries defined by a
    /// generating function f.
    pub fn from_fn<F: FnMut(usize) -> f64>(n: usize, mut f: F) -> Self {
        Self {
            data: (0..n).map(|i| f(i)).collect(),
        }
    }

    /// A vector of n zeroes.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// The standard basis vector of dimension n with a 1 at index i.
    pub fn basis(i: usize, n: usize) -> Result<Self> {
        if i >= n {
            return Err(TesseraError::IndexOutOfBounds { index: i, len: n });
        }
        let mut v = Self::zeros(n);
        v.data[i] = 1.0;
        Ok(v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at index i, if in bounds.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Adds w to self in place.
    pub fn add_assign(&mut self, w: &Vector) -> Result<()> {
        self.check_len(w)?;
        for (a, b) in self.data.iter_mut().zip(w.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts w from self in place.
    pub fn sub_assign(&mut self, w: &Vector) -> Result<()> {
        self.check_len(w)?;
        for (a, b) in self.data.iter_mut().zip(w.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Returns self + w.
    pub fn add(&self, w: &Vector) -> Result<Vector> {
        let mut v = self.clone();
        v.add_assign(w)?;
        Ok(v)
    }

    /// Returns self - w.
    pub fn sub(&self, w: &Vector) -> Result<Vector> {
        let mut v = self.clone();
        v.sub_assign(w)?;
        Ok(v)
    }

    /// Multiplies each entry by a in place.
    pub fn scale(&mut self, a: f64) {
        for x in &mut self.data {
            *x *= a;
        }
    }

    /// Returns a * self.
    pub fn scaled(&self, a: f64) -> Vector {
        let mut v = self.clone();
        v.scale(a);
        v
    }

    /// Returns self / a.
    pub fn scaled_div(&self, a: f64) -> Result<Vector> {
        if a == 0.0 {
            return Err(TesseraError::DivisionByZero);
        }
        Ok(self.scaled(1.0 / a))
    }

    /// Dot product of self and w.
    pub fn dot(&self, w: &Vector) -> Result<f64> {
        self.check_len(w)?;
        Ok(self
            .data
            .iter()
            .zip(w.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean magnitude |v|.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Returns v/|v|, the unit vector pointing in the direction of v.
    pub fn unit(&self) -> Result<Vector> {
        let r = self.norm();
        if r == 0.0 {
            return Err(TesseraError::DivisionByZero);
        }
        Ok(self.scaled(1.0 / r))
    }

    /// Total order: entrywise lexicographic over the shared prefix, then
    /// by length. Vectors of different dimensions are comparable.
    pub fn compare(&self, w: &Vector) -> Ordering {
        for (a, b) in self.data.iter().zip(w.data.iter()) {
            if a < b {
                return Ordering::Less;
            }
            if b < a {
                return Ordering::Greater;
            }
        }
        self.len().cmp(&w.len())
    }

    /// Entrywise comparison within an absolute tolerance. Vectors of
    /// different lengths are never approximately equal.
    pub fn approx_eq(&self, w: &Vector, tol: f64) -> bool {
        self.len() == w.len()
            && self
                .data
                .iter()
                .zip(w.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    fn check_len(&self, w: &Vector) -> Result<()> {
        if self.len() != w.len() {
            return Err(TesseraError::LengthMismatch {
                left: self.len(),
                right: w.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn() {
        let v = Vector::from_fn(4, |i| (i * i) as f64);
        assert_eq!(v.len(), 4);
        assert_eq!(v.get(3), Some(9.0));
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn test_basis() {
        let e1 = Vector::basis(1, 3).unwrap();
        assert_eq!(e1, Vector::from(vec![0.0, 1.0, 0.0]));
        assert!(Vector::basis(3, 3).is_err());
    }

    #[test]
    fn test_add_sub() {
        let v = Vector::from(vec![1.0, 2.0, 3.0]);
        let w = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(v.add(&w).unwrap(), Vector::from(vec![5.0, 7.0, 9.0]));
        assert_eq!(w.sub(&v).unwrap(), Vector::from(vec![3.0, 3.0, 3.0]));

        let short = Vector::from(vec![1.0]);
        assert_eq!(
            v.add(&short),
            Err(TesseraError::LengthMismatch { left: 3, right: 1 }),
        );
    }

    #[test]
    fn test_dot() {
        let v = Vector::from(vec![1.0, 2.0, 3.0]);
        let w = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(v.dot(&w).unwrap(), 32.0);
    }

    #[test]
    fn test_norm_unit() {
        let v = Vector::from(vec![3.0, 4.0]);
        assert_eq!(v.norm(), 5.0);
        let u = v.unit().unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!(u.approx_eq(&Vector::from(vec![0.6, 0.8]), 1e-12));

        assert_eq!(Vector::zeros(2).unit(), Err(TesseraError::DivisionByZero));
    }

    #[test]
    fn test_scaled_div_zero() {
        let v = Vector::from(vec![1.0, 2.0]);
        assert_eq!(v.scaled_div(0.0), Err(TesseraError::DivisionByZero));
        assert_eq!(v.scaled_div(2.0).unwrap(), Vector::from(vec![0.5, 1.0]));
    }

    #[test]
    fn test_compare() {
        let v = Vector::from(vec![1.0, 2.0]);
        let w = Vector::from(vec![1.0, 3.0]);
        assert_eq!(v.compare(&w), Ordering::Less);
        assert_eq!(w.compare(&v), Ordering::Greater);
        assert_eq!(v.compare(&v.clone()), Ordering::Equal);

        // Shared prefix equal, longer vector follows
        let longer = Vector::from(vec![1.0, 2.0, 0.0]);
        assert_eq!(v.compare(&longer), Ordering::Less);
    }

    #[test]
    fn test_display() {
        let v = Vector::from(vec![1.0, 2.5, -3.0]);
        assert_eq!(v.to_string(), "[1, 2.5, -3]");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector::from(vec![1.0, -2.0, 0.5]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
