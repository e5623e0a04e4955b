//! Matrix inversion and linear system solving.

use crate::{
    matrix::{echelon::Pivoting, Matrix, MatrixError},
    scalar::Scalar,
};
use tracing::debug;

/// Multiplicative inverse.
pub trait Inv {
    /// The inverse, or the reason there is none.
    type Output;

    /// Multiplicative inverse.
    fn inv(self) -> Self::Output;
}

impl<T: Scalar> Matrix<T> {
    /// Inverse of the matrix using Gauss-Jordan elimination on `[self | I]`, O(N^3).
    ///
    /// Fails with [`MatrixError::NotSquare`] before doing any work if the matrix is not square, and with
    /// [`MatrixError::Singular`] if the left block of the reduced augmented matrix is not the identity.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        self.inverse_with(Pivoting::default())
    }

    /// Inverse of the matrix using the given pivoting rule.
    pub fn inverse_with(&self, pivoting: Pivoting) -> Result<Matrix<T>, MatrixError> {
        let identity = self.square_identity()?;
        self.reduce_against(&identity, &identity, pivoting)
    }

    /// Solves `self * x = rhs` for `x`, `rhs` can have any number of columns.
    ///
    /// Only systems with a unique solution are solved, everything else is reported as
    /// [`MatrixError::Singular`].
    pub fn solve(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.solve_with(rhs, Pivoting::default())
    }

    /// Solves `self * x = rhs` for `x` using the given pivoting rule.
    pub fn solve_with(&self, rhs: &Matrix<T>, pivoting: Pivoting) -> Result<Matrix<T>, MatrixError> {
        let identity = self.square_identity()?;
        self.reduce_against(rhs, &identity, pivoting)
    }

    fn square_identity(&self) -> Result<Matrix<T>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { nrows: self.nrows(), ncols: self.ncols() });
        }
        Matrix::identity(self.nrows())
    }

    /// Reduces `[self | rhs]` and returns the right block if the left one became `identity`.
    fn reduce_against(
        &self,
        rhs: &Matrix<T>,
        identity: &Matrix<T>,
        pivoting: Pivoting,
    ) -> Result<Matrix<T>, MatrixError> {
        let reduced = self.augment(rhs)?.reduced_row_echelon_with(pivoting);
        let left = reduced.left(self.ncols())?;
        if &left != identity {
            debug!("Reduced matrix has rank {} out of {}, matrix is singular", left.rank(), self.nrows());
            return Err(MatrixError::Singular);
        }
        reduced.right(self.ncols())
    }
}

impl<T: Scalar> Inv for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Inverse of the matrix, see [`Matrix::inverse`].
    fn inv(self) -> Self::Output {
        self.inverse()
    }
}

impl<T: Scalar> Inv for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn inv(self) -> Self::Output {
        self.inverse()
    }
}
