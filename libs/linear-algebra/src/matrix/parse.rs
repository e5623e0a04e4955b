//! Textual matrix representation.
//!
//! Rows are separated by a newline, a colon or a pipe and columns by any run of spaces, tabs or commas, so
//! `"1 2\n3 4"`, `"1,2:3,4"` and `"|1 2|3 4|"` all describe the same matrix.

use crate::{
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

// Safety: the patterns are constant and covered by tests.
#[allow(clippy::expect_used)]
static ALPHABET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\n\r:| \t,.0-9\-]*$").expect("invalid alphabet pattern"));

#[allow(clippy::expect_used)]
static ROW_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r:|]").expect("invalid row pattern"));

#[allow(clippy::expect_used)]
static COLUMN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t,]+").expect("invalid column pattern"));

impl<T: Scalar> Matrix<T> {
    /// Parses a matrix from its textual representation.
    pub fn parse(s: &str) -> Result<Matrix<T>, MatrixError> {
        if !ALPHABET.is_match(s) {
            return Err(MatrixError::BadString);
        }
        let mut rows = Vec::new();
        for row in ROW_SEPARATOR.split(s) {
            let row = row.trim();
            if row.is_empty() {
                continue;
            }
            let values = COLUMN_SEPARATOR
                .split(row)
                .filter(|column| !column.is_empty())
                .map(|column| column.parse::<T>().map_err(|_| MatrixError::BadString))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }
        Matrix::from_rows(rows)
    }
}

impl<T: Scalar> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matrix::parse(s)
    }
}
