//! Human readable rendering.

use crate::{matrix::Matrix, scalar::Scalar};
use std::fmt::{self, Display, Formatter};

/// Number of decimals used when the formatter does not specify a precision.
pub const DEFAULT_PRECISION: usize = 3;

/// Renders one entry rounded to `precision` decimals.
///
/// Values that are integral after rounding lose their decimal point, and a rounded negative zero prints as
/// `0`.
pub fn format_scalar<T: Scalar>(value: T, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

impl<T: Scalar> Display for Matrix<T> {
    /// One line per row with entries separated by a space, `{:.N}` sets the number of decimals.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|value| format_scalar(*value, precision)).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
