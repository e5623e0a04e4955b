//! Matrix Operations

use crate::{
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
};
use std::ops::{Add, Mul, Neg, Sub};

impl<T: Scalar> Matrix<T> {
    /// Entry-wise sum, both matrices must have the same shape.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(other, |left, right| left + right)
    }

    /// Entry-wise difference, both matrices must have the same shape.
    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(other, |left, right| left - right)
    }

    /// Multiply every entry by `k`.
    pub fn scalar_multiply(&self, k: T) -> Matrix<T> {
        let data = self.data().iter().map(|entry| *entry * k).collect();
        Matrix::from_raw(data, self.nrows(), self.ncols())
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ncols(), other.ncols()),
                found: other.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.nrows().saturating_mul(other.ncols()));
        for row in self.rows() {
            for col in 0..other.ncols() {
                let dot = row
                    .iter()
                    .zip(other.column_iter(col))
                    .fold(T::zero(), |sum, (left, right)| sum + *left * *right);
                data.push(dot);
            }
        }
        Matrix::new(data, self.nrows(), other.ncols())
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Matrix<T> {
        let data = (0..self.ncols()).flat_map(|col| self.column_iter(col).copied()).collect();
        Matrix::from_raw(data, self.ncols(), self.nrows())
    }

    /// Horizontal concatenation `[self | other]`, both matrices must have the same number of rows.
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.nrows() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows(), other.ncols()),
                found: other.shape(),
            });
        }
        let data = self.rows().zip(other.rows()).flat_map(|(left, right)| left.iter().chain(right)).copied().collect();
        let ncols = self.ncols().checked_add(other.ncols()).ok_or(MatrixError::InvalidSize)?;
        Matrix::new(data, self.nrows(), ncols)
    }

    /// The leftmost `n` columns.
    pub fn left(&self, n: usize) -> Result<Matrix<T>, MatrixError> {
        if n == 0 || n > self.ncols() {
            return Err(MatrixError::InvalidSize);
        }
        let data = self.rows().flat_map(|row| row.iter().take(n)).copied().collect();
        Matrix::new(data, self.nrows(), n)
    }

    /// Every column from index `n` onward.
    pub fn right(&self, n: usize) -> Result<Matrix<T>, MatrixError> {
        if n >= self.ncols() {
            return Err(MatrixError::InvalidSize);
        }
        let data = self.rows().flat_map(|row| row.iter().skip(n)).copied().collect();
        Matrix::new(data, self.nrows(), self.ncols().saturating_sub(n))
    }

    fn zip_with<F>(&self, other: &Matrix<T>, op: F) -> Result<Matrix<T>, MatrixError>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch { expected: self.shape(), found: other.shape() });
        }
        let data = self.data().iter().zip(other.data()).map(|(left, right)| op(*left, *right)).collect();
        Matrix::new(data, self.nrows(), self.ncols())
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        Matrix::add(&self, other)
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, other: &Matrix<T>) -> Self::Output {
        self.subtract(other)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.multiply(other)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.scalar_multiply(-T::one())
    }
}

#[cfg(test)]
mod test {
    use crate::matrix::{Matrix, MatrixError};
    use rstest::rstest;

    fn make_rows(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    fn identity3() -> Matrix<f64> {
        make_rows(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
    }

    #[rstest]
    #[case::different_columns(identity3(), make_rows(&[&[1.0, 0.0], &[0.0, 1.0], &[0.0, 0.0]]))]
    #[case::different_rows(identity3(), make_rows(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]))]
    #[case::different_rows_and_columns(
        make_rows(&[&[1.0, 0.0], &[0.0, 1.0], &[0.0, 0.0]]),
        make_rows(&[&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
    )]
    fn add_mismatch(#[case] left: Matrix<f64>, #[case] right: Matrix<f64>) {
        let expected = MatrixError::DimensionMismatch { expected: left.shape(), found: right.shape() };
        assert_eq!(left.add(&right), Err(expected.clone()));
        assert_eq!(left.subtract(&right), Err(expected));
    }

    #[test]
    fn addition() {
        let left = make_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let right = make_rows(&[&[0.5, -2.0], &[1.0, 1.0]]);
        assert_eq!((left + &right).unwrap(), make_rows(&[&[1.5, 0.0], &[4.0, 5.0]]));
    }

    #[test]
    fn subtraction() {
        let left = make_rows(&[&[2.0, 0.0, 1.0], &[2.0, 3.0, -4.0], &[3.0, 2.0, 2.0]]);
        let right = make_rows(&[&[3.0, 2.0, -1.0], &[2.0, 0.0, -1.0], &[0.0, 1.0, 2.0]]);
        let expected = make_rows(&[&[-1.0, -2.0, 2.0], &[0.0, 3.0, -3.0], &[3.0, 1.0, 0.0]]);
        assert_eq!(left.subtract(&right).unwrap(), expected);
        assert_eq!((right - &left).unwrap(), -expected);
    }

    #[test]
    fn scalar_multiplication() {
        let matrix = make_rows(&[&[1.0, -2.0], &[0.5, 0.0]]);
        assert_eq!(matrix.scalar_multiply(2.0), make_rows(&[&[2.0, -4.0], &[1.0, 0.0]]));
    }

    #[test]
    fn multiplication() {
        let left = make_rows(&[&[2.0, 0.0, 1.0], &[2.0, 3.0, -4.0], &[3.0, 2.0, 2.0]]);
        let right = make_rows(&[&[3.0, 2.0, -1.0], &[2.0, 0.0, -1.0], &[0.0, 1.0, 2.0]]);
        let expected = make_rows(&[&[6.0, 5.0, 0.0], &[12.0, 0.0, -13.0], &[13.0, 8.0, -1.0]]);
        assert_eq!((left * &right).unwrap(), expected);
    }

    #[test]
    fn multiplication_non_square() {
        let left = make_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let right = make_rows(&[&[7.0], &[8.0], &[9.0]]);
        let result = left.multiply(&right).unwrap();
        assert_eq!(result, make_rows(&[&[50.0], &[122.0]]));
        assert_eq!(result.shape(), (2, 1));
    }

    #[test]
    fn multiplication_mismatch() {
        let left = make_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let result = left.multiply(&left);
        assert_eq!(result, Err(MatrixError::DimensionMismatch { expected: (3, 3), found: (2, 3) }));
    }

    #[test]
    fn transpose() {
        let matrix = make_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let expected = make_rows(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]);
        assert_eq!(matrix.transpose(), expected);
        assert_eq!(matrix.transpose().transpose(), matrix);
    }

    #[test]
    fn augment_and_split() {
        let left = make_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let right = make_rows(&[&[5.0], &[6.0]]);
        let augmented = left.augment(&right).unwrap();
        assert_eq!(augmented, make_rows(&[&[1.0, 2.0, 5.0], &[3.0, 4.0, 6.0]]));
        assert_eq!(augmented.left(2).unwrap(), left);
        assert_eq!(augmented.right(2).unwrap(), right);
    }

    #[test]
    fn augment_mismatch() {
        let left = make_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let right = make_rows(&[&[5.0, 6.0]]);
        assert_eq!(left.augment(&right), Err(MatrixError::DimensionMismatch { expected: (2, 2), found: (1, 2) }));
    }

    #[rstest]
    #[case::left_zero(0, true)]
    #[case::left_too_wide(4, true)]
    #[case::right_empty(3, false)]
    #[case::right_too_wide(7, false)]
    fn slice_invalid_size(#[case] n: usize, #[case] left: bool) {
        let matrix = make_rows(&[&[1.0, 2.0, 3.0]]);
        let result = if left { matrix.left(n) } else { matrix.right(n) };
        assert_eq!(result, Err(MatrixError::InvalidSize));
    }
}
