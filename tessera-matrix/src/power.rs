//! Integer matrix powers
//!
//! Binary exponentiation over square matrices, with negative exponents
//! routed through [`Matrix::inverse`].

use tessera_core::Result;

use crate::types::Matrix;

impl Matrix {
    /// Raises a square matrix to an integer power.
    ///
    /// The zeroth power is the identity, positive powers square-and-
    /// multiply in O(log p) products, and negative powers invert first
    /// so a singular base fails with [`tessera_core::TesseraError::Singular`].
    pub fn pow(&self, p: i64) -> Result<Matrix> {
        self.check_square("power")?;
        // unsigned_abs keeps i64::MIN representable.
        if p < 0 {
            self.inverse()?.pow_unsigned(p.unsigned_abs())
        } else {
            self.pow_unsigned(p as u64)
        }
    }

    fn pow_unsigned(&self, mut p: u64) -> Result<Matrix> {
        match p {
            0 => Ok(Matrix::identity(self.rows())),
            1 => Ok(self.clone()),
            _ => {
                let mut result = Matrix::identity(self.rows());
                let mut base = self.clone();
                while p > 0 {
                    if p & 1 == 1 {
                        result = result.matmul(&base)?;
                    }
                    p >>= 1;
                    if p > 0 {
                        base = base.matmul(&base)?;
                    }
                }
                Ok(result)
            }
        }
    }
}
