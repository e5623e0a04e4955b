//! Scalar element types.

use num_traits::Float;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// The element type stored in a [`Matrix`](crate::Matrix).
///
/// Any floating point type qualifies: it must support the field operations used during elimination, be
/// printable and be parseable from text.
pub trait Scalar: Float + Debug + Display + FromStr + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + FromStr + Send + Sync + 'static {}
