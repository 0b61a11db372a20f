//! Shared error type for Tessera
//!
//! Every fallible operation in the workspace returns `TesseraError`.
//! Shape and index misuse are programmer errors; `Singular` is an
//! expected, recoverable outcome (not every matrix is invertible).

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TesseraError>;

/// Error type for vector and matrix operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TesseraError {
    /// Matrix operands disagree in shape for an elementwise, join, chain,
    /// or comparison operation.
    #[error("dimension mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Vector operands disagree in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An operation was given a matrix of an unsuitable shape
    /// (non-square, empty, or rows exceeding columns for elimination).
    #[error("{op} is undefined for a {rows}x{cols} matrix")]
    InvalidShape {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// A row or column index is out of range.
    #[error("index {index} out of bounds for axis of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Constructor input cannot form a valid matrix or chain.
    #[error("invalid construction: {0}")]
    Construction(String),

    /// Division by zero in a scalar operation.
    #[error("division by zero")]
    DivisionByZero,

    /// Elimination found no nonzero pivot candidate in a column; the
    /// system has no unique solution.
    #[error("matrix is singular: no nonzero pivot in column {column}")]
    Singular { column: usize },
}

impl TesseraError {
    /// Dimension mismatch between two matrices given as (rows, cols) pairs.
    pub fn dim_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        TesseraError::DimensionMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }

    /// Shape error for a named operation.
    pub fn invalid_shape(op: &'static str, dims: (usize, usize)) -> Self {
        TesseraError::InvalidShape {
            op,
            rows: dims.0,
            cols: dims.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TesseraError::dim_mismatch((2, 3), (3, 3));
        assert_eq!(err.to_string(), "dimension mismatch: 2x3 vs 3x3");

        let err = TesseraError::invalid_shape("determinant", (3, 4));
        assert_eq!(err.to_string(), "determinant is undefined for a 3x4 matrix");

        let err = TesseraError::Singular { column: 1 };
        assert_eq!(
            err.to_string(),
            "matrix is singular: no nonzero pivot in column 1"
        );
    }

    #[test]
    fn test_variant_equality() {
        assert_eq!(
            TesseraError::LengthMismatch { left: 2, right: 3 },
            TesseraError::LengthMismatch { left: 2, right: 3 },
        );
        assert_ne!(
            TesseraError::DivisionByZero,
            TesseraError::Singular { column: 0 },
        );
    }
}
