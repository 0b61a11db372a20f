//! Chain-multiplication planner
//!
//! Matrix multiplication is associative, so the product of a chain is the
//! same under any parenthesization — but the amount of arithmetic is not.
//! The planner builds the standard O(n^3)-time, O(n^2)-space dynamic
//! program over interval lengths and evaluates the product through the
//! minimum-cost association, rather than left-folding the chain.

use tracing::debug;

use tessera_core::{Result, TesseraError};

use crate::types::Matrix;

/// Cost and split tables for an optimal parenthesization of a product of
/// n matrices, where matrix i has shape dims[i] x dims[i+1].
#[derive(Debug)]
pub struct ChainPlan {
    /// cost[i][j]: minimum scalar-multiplication count for the
    /// sub-product spanning i..=j.
    cost: Vec<Vec<usize>>,
    /// split[i][j]: the k at which the optimal parenthesization breaks
    /// the range i..=j into i..=k and k+1..=j.
    split: Vec<Vec<usize>>,
}

impl ChainPlan {
    /// Builds the tables for a chain with the given boundary dimensions
    /// (n + 1 entries for n matrices), filled for increasing interval
    /// length.
    pub fn new(dims: &[usize]) -> Self {
        let n = dims.len().saturating_sub(1);
        let mut cost = vec![vec![0; n]; n];
        let mut split = vec![vec![0; n]; n];

        for h in 1..n {
            for i in 0..n - h {
                let j = i + h;
                let mut best = usize::MAX;
                for k in i..j {
                    let c = cost[i][k] + cost[k + 1][j] + dims[i] * dims[k + 1] * dims[j + 1];
                    if c < best {
                        best = c;
                        split[i][j] = k;
                    }
                }
                cost[i][j] = best;
            }
        }

        Self { cost, split }
    }

    /// Number of matrices in the planned chain.
    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }

    /// Minimum scalar-multiplication count for the whole chain.
    pub fn total_cost(&self) -> usize {
        let n = self.len();
        if n == 0 {
            0
        } else {
            self.cost[0][n - 1]
        }
    }

    /// Minimum cost for the sub-product spanning i..=j, if the interval
    /// lies within the chain.
    pub fn cost(&self, i: usize, j: usize) -> Option<usize> {
        self.cost.get(i)?.get(j).copied()
    }

    /// Evaluates the sub-product spanning i..=j through the split table.
    fn eval(&self, mats: &[Matrix], i: usize, j: usize) -> Result<Matrix> {
        if i == j {
            return Ok(mats[i].clone());
        }
        let k = self.split[i][j];
        let left = self.eval(mats, i, k)?;
        let right = self.eval(mats, k + 1, j)?;
        left.matmul(&right)
    }
}

/// Multiplies a chain of pairwise-compatible matrices through the
/// minimum-cost parenthesization.
///
/// An empty chain is an error; a single matrix is returned unchanged; a
/// pair is multiplied directly, bypassing the table.
pub fn multiply_chain(mats: &[Matrix]) -> Result<Matrix> {
    match mats.len() {
        0 => Err(TesseraError::Construction("empty matrix chain".into())),
        1 => Ok(mats[0].clone()),
        2 => mats[0].matmul(&mats[1]),
        n => {
            // Validate pairwise compatibility before planning.
            for w in mats.windows(2) {
                if w[0].cols() != w[1].rows() {
                    return Err(TesseraError::dim_mismatch(w[0].dims(), w[1].dims()));
                }
            }

            let mut dims = Vec::with_capacity(n + 1);
            for a in mats {
                dims.push(a.rows());
            }
            dims.push(mats[n - 1].cols());

            let plan = ChainPlan::new(&dims);
            debug!(n, cost = plan.total_cost(), "planned multiplication chain");
            plan.eval(mats, 0, n - 1)
        }
    }
}
