//! Tessera Core - Fundamental types
//!
//! This crate provides the types shared across the Tessera workspace:
//! - `Vector`: an ordered n-tuple of real numbers
//! - `TesseraError`: the error taxonomy for all vector/matrix operations

mod error;
mod vector;

pub use error::{Result, TesseraError};
pub use vector::Vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Result, TesseraError, Vector};
}
