//! Side-effect free dense matrices over floating point scalars: construction, elementary row and column
//! operations, arithmetic, row reduction and inversion.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod matrix;
pub mod scalar;
#[cfg(feature = "serde")]
pub mod serde;

pub use matrix::{Inv, Matrix, MatrixError, PivotPosition, Pivoting};
pub use scalar::Scalar;
