//! Matrix.

use crate::scalar::Scalar;
use num_traits::ToPrimitive;
use thiserror::Error;

/// A dense, non-empty, rectangular matrix.
///
/// Every operation returns a new matrix, the receiver is never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar> {
    /// Row-major entries.
    data: Vec<T>,

    /// Number of rows.
    nrows: usize,

    /// Number of columns.
    ncols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// New matrix from row-major data.
    pub fn new(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Matrix<T>, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Malformed(format!("matrix must not be empty, got {nrows}x{ncols}")));
        }
        let n = nrows.checked_mul(ncols).ok_or(MatrixError::InvalidSize)?;
        if n != data.len() {
            return Err(MatrixError::Malformed(format!(
                "given data has {} entries which does not match nrows x ncols = {n}",
                data.len()
            )));
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// New matrix from a list of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or_default();
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::Malformed("matrix must have at least one row and one column".into()));
        }
        let mut data = Vec::with_capacity(nrows.saturating_mul(ncols));
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::Malformed(format!(
                    "row {index} has {} columns, expected {ncols}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Zero matrix.
    pub fn zero(nrows: usize, ncols: usize) -> Result<Matrix<T>, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidSize);
        }
        let n = nrows.checked_mul(ncols).ok_or(MatrixError::InvalidSize)?;
        Ok(Matrix { data: vec![T::zero(); n], nrows, ncols })
    }

    /// Identity matrix of size `n`.
    ///
    /// `n` can be any primitive number but it has to be a natural number, `-5` or `2.3` are rejected.
    pub fn identity<N: ToPrimitive>(n: N) -> Result<Matrix<T>, MatrixError> {
        let n = natural_size(n)?;
        let mut m = Matrix::zero(n, n)?;
        for (index, row) in m.data.chunks_exact_mut(n).enumerate() {
            if let Some(entry) = row.get_mut(index) {
                *entry = T::one();
            }
        }
        Ok(m)
    }

    /// Returns the reference to data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the data as a Vec consuming the matrix.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row-major copy of every entry.
    pub fn flatten(&self) -> Vec<T> {
        self.data.clone()
    }

    /// The matrix as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// The `(rows, columns)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        self.check_row(row)?;
        self.check_column(col)?;
        let index = self.index(row, col).ok_or(MatrixError::InvalidSize)?;
        self.data.get(index).ok_or(MatrixError::IndexOutOfBounds { index: col, len: self.ncols })
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.ncols)
    }

    /// Iterates over the entries of column `col`, top to bottom.
    pub fn column_iter(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        let len = if col < self.ncols { self.nrows } else { 0 };
        self.data.iter().skip(col).step_by(self.ncols).take(len)
    }

    /// Row `row` as a `1 x n` matrix.
    pub fn row(&self, row: usize) -> Result<Matrix<T>, MatrixError> {
        let data = self.row_slice(row).ok_or(MatrixError::IndexOutOfBounds { index: row, len: self.nrows })?;
        Ok(Matrix { data: data.to_vec(), nrows: 1, ncols: self.ncols })
    }

    /// Column `col` as a `n x 1` matrix.
    pub fn column(&self, col: usize) -> Result<Matrix<T>, MatrixError> {
        self.check_column(col)?;
        let data = self.column_iter(col).copied().collect();
        Ok(Matrix { data, nrows: self.nrows, ncols: 1 })
    }

    /// Whether both matrices have the same shape and every pair of entries differs by at most
    /// `tolerance`.
    pub fn approx_eq(&self, other: &Matrix<T>, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(left, right)| (*left - *right).abs() <= tolerance)
    }

    /// Builds a matrix from data whose shape is already known to be valid.
    pub(crate) fn from_raw(data: Vec<T>, nrows: usize, ncols: usize) -> Matrix<T> {
        debug_assert_eq!(data.len(), nrows * ncols);
        Matrix { data, nrows, ncols }
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row < self.nrows { Ok(()) } else { Err(MatrixError::IndexOutOfBounds { index: row, len: self.nrows }) }
    }

    pub(crate) fn check_column(&self, col: usize) -> Result<(), MatrixError> {
        if col < self.ncols { Ok(()) } else { Err(MatrixError::IndexOutOfBounds { index: col, len: self.ncols }) }
    }

    /// The entry at `(row, col)`, `None` when out of bounds.
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.ncols {
            return None;
        }
        self.index(row, col).and_then(|index| self.data.get(index)).copied()
    }

    pub(crate) fn row_slice(&self, row: usize) -> Option<&[T]> {
        self.data.chunks_exact(self.ncols).nth(row)
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> Option<&mut [T]> {
        self.data.chunks_exact_mut(self.ncols).nth(row)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> + '_ {
        self.data.chunks_exact_mut(self.ncols)
    }

    /// Two distinct rows borrowed mutably at once, in the requested order.
    pub(crate) fn row_pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut [T], &mut [T])> {
        if first == second {
            return None;
        }
        let (low, high) = if first < second { (first, second) } else { (second, first) };
        let mut rows = self.data.chunks_exact_mut(self.ncols);
        let low_row = rows.nth(low)?;
        let high_row = rows.nth(high.checked_sub(low)?.checked_sub(1)?)?;
        if first < second { Some((low_row, high_row)) } else { Some((high_row, low_row)) }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        row.checked_mul(self.ncols)?.checked_add(col)
    }
}

/// Checks that `n` is a natural number that can be used as a dimension.
pub(crate) fn natural_size<N: ToPrimitive>(n: N) -> Result<usize, MatrixError> {
    let value = n.to_f64().ok_or(MatrixError::InvalidSize)?;
    if !(value >= 1.0 && value.fract() == 0.0) {
        return Err(MatrixError::InvalidSize);
    }
    n.to_usize().ok_or(MatrixError::InvalidSize)
}

/// Matrix Error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /// The input does not describe a non-empty rectangular matrix.
    #[error("malformed matrix: {0}")]
    Malformed(String),

    /// The textual representation contains unexpected characters or values.
    #[error("matrix string contains invalid characters or values")]
    BadString,

    /// A size parameter is not a valid natural number for the operation.
    #[error("invalid size")]
    InvalidSize,

    /// The operands have incompatible shapes.
    #[error("dimension mismatch, expected {expected:?} but found {found:?}")]
    DimensionMismatch {
        /// The shape the operation required.
        expected: (usize, usize),

        /// The shape that was given.
        found: (usize, usize),
    },

    /// A row or column index is outside the matrix.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,

        /// The number of rows or columns.
        len: usize,
    },

    /// Only square matrices can be inverted.
    #[error("matrix is not square, it has {nrows} rows and {ncols} columns")]
    NotSquare {
        /// Number of rows.
        nrows: usize,

        /// Number of columns.
        ncols: usize,
    },

    /// Non-invertible, singular matrix.
    #[error("singular matrix can't be inverted")]
    Singular,
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn make_matrix(n: usize, values: &[f64]) -> Matrix<f64> {
        Matrix::new(values.to_vec(), n, values.len() / n).unwrap()
    }

    #[test]
    fn identity() {
        let result = Matrix::<f64>::identity(3).unwrap();
        let expected = make_matrix(3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::negative(-5.0)]
    #[case::fractional(2.3)]
    #[case::zero(0.0)]
    #[case::not_a_number(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn identity_invalid_size(#[case] n: f64) {
        assert_eq!(Matrix::<f64>::identity(n), Err(MatrixError::InvalidSize));
    }

    #[test]
    fn identity_negative_integer() {
        assert_eq!(Matrix::<f64>::identity(-5), Err(MatrixError::InvalidSize));
    }

    #[test]
    fn identity_integral_float() {
        assert_eq!(Matrix::<f64>::identity(2.0).unwrap(), Matrix::identity(2usize).unwrap());
    }

    #[rstest]
    #[case::ragged(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]])]
    #[case::longer_last_row(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0, 10.0]])]
    #[case::no_rows(vec![])]
    #[case::no_columns(vec![vec![]])]
    fn from_rows_malformed(#[case] rows: Vec<Vec<f64>>) {
        assert!(matches!(Matrix::from_rows(rows), Err(MatrixError::Malformed(_))));
    }

    #[rstest]
    #[case::wrong_length(vec![1.0, 2.0, 3.0], 2, 2)]
    #[case::no_rows(vec![], 0, 2)]
    #[case::no_columns(vec![], 2, 0)]
    fn new_malformed(#[case] data: Vec<f64>, #[case] nrows: usize, #[case] ncols: usize) {
        assert!(matches!(Matrix::new(data, nrows, ncols), Err(MatrixError::Malformed(_))));
    }

    #[test]
    fn from_rows_matches_new() {
        let rows = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let flat = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(rows, flat);
        assert_eq!(rows.shape(), (2, 3));
        assert_eq!(rows.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(rows.flatten(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn row_and_column() {
        let matrix = make_matrix(2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(matrix.row(1).unwrap(), Matrix::new(vec![4.0, 5.0, 6.0], 1, 3).unwrap());
        assert_eq!(matrix.column(2).unwrap(), Matrix::new(vec![3.0, 6.0], 2, 1).unwrap());
        assert_eq!(matrix.row(2), Err(MatrixError::IndexOutOfBounds { index: 2, len: 2 }));
        assert_eq!(matrix.column(3), Err(MatrixError::IndexOutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn entry() {
        let matrix = make_matrix(2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(matrix.entry(1, 0), Ok(&4.0));
        assert_eq!(matrix.entry(0, 3), Err(MatrixError::IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(matrix.entry(2, 0), Err(MatrixError::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn row_pair_mut_keeps_order() {
        let mut matrix = make_matrix(3, &[1.0, 2.0, 3.0]);
        let (first, second) = matrix.row_pair_mut(2, 0).unwrap();
        assert_eq!((first[0], second[0]), (3.0, 1.0));
        assert!(matrix.row_pair_mut(1, 1).is_none());
        assert!(matrix.row_pair_mut(0, 3).is_none());
    }

    #[test]
    fn approx_eq() {
        let left = make_matrix(1, &[1.0, 2.0]);
        let right = make_matrix(1, &[1.0 + 1e-12, 2.0 - 1e-12]);
        assert!(left.approx_eq(&right, 1e-9));
        assert!(!left.approx_eq(&right, 1e-13));
        assert!(!left.approx_eq(&make_matrix(2, &[1.0, 2.0]), 1.0));
    }
}
