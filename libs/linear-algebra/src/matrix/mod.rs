//! Matrix operations.

pub mod display;
pub mod echelon;
pub mod elementary;
pub mod inverse;
pub mod matrix;
pub mod ops;
pub mod parse;

pub use echelon::{PivotPosition, Pivoting};
pub use inverse::Inv;
pub use matrix::{Matrix, MatrixError};
