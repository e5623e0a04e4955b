//! Elementary row and column operations.
//!
//! The public operations copy the receiver and apply the change to the copy. The in-place variants are
//! used by the reducers, which own a private working copy and never expose it mid-elimination.

use crate::{
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
};

impl<T: Scalar> Matrix<T> {
    /// Swap rows `a` and `b`.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Matrix<T>, MatrixError> {
        self.check_row(a)?;
        self.check_row(b)?;
        let mut new = self.clone();
        new.swap_rows_in_place(a, b);
        Ok(new)
    }

    /// Swap columns `a` and `b`.
    pub fn swap_columns(&self, a: usize, b: usize) -> Result<Matrix<T>, MatrixError> {
        self.check_column(a)?;
        self.check_column(b)?;
        let mut new = self.clone();
        for row in new.rows_mut() {
            row.swap(a, b);
        }
        Ok(new)
    }

    /// Multiply every entry of row `row` by `k`.
    pub fn scale_row(&self, row: usize, k: T) -> Result<Matrix<T>, MatrixError> {
        self.check_row(row)?;
        let mut new = self.clone();
        new.scale_row_in_place(row, k);
        Ok(new)
    }

    /// Multiply every entry of column `col` by `k`.
    pub fn scale_column(&self, col: usize, k: T) -> Result<Matrix<T>, MatrixError> {
        self.check_column(col)?;
        let mut new = self.clone();
        for row in new.rows_mut() {
            if let Some(entry) = row.get_mut(col) {
                *entry = *entry * k;
            }
        }
        Ok(new)
    }

    /// Add `k` times row `source` to row `dest`.
    pub fn add_row_multiple(&self, dest: usize, source: usize, k: T) -> Result<Matrix<T>, MatrixError> {
        self.check_row(dest)?;
        self.check_row(source)?;
        let mut new = self.clone();
        new.add_row_multiple_in_place(dest, source, k);
        Ok(new)
    }

    /// Add `k` times column `source` to column `dest`.
    pub fn add_column_multiple(&self, dest: usize, source: usize, k: T) -> Result<Matrix<T>, MatrixError> {
        self.check_column(dest)?;
        self.check_column(source)?;
        let mut new = self.clone();
        for row in new.rows_mut() {
            let Some(source_entry) = row.get(source).copied() else {
                continue;
            };
            if let Some(entry) = row.get_mut(dest) {
                *entry = *entry + source_entry * k;
            }
        }
        Ok(new)
    }

    pub(crate) fn swap_rows_in_place(&mut self, a: usize, b: usize) {
        if let Some((first, second)) = self.row_pair_mut(a, b) {
            first.swap_with_slice(second);
        }
    }

    pub(crate) fn scale_row_in_place(&mut self, row: usize, k: T) {
        if let Some(row) = self.row_slice_mut(row) {
            row.iter_mut().for_each(|entry| *entry = *entry * k);
        }
    }

    /// Divides instead of multiplying by the reciprocal so that `divisor / divisor` is exactly one.
    pub(crate) fn divide_row_in_place(&mut self, row: usize, divisor: T) {
        if let Some(row) = self.row_slice_mut(row) {
            row.iter_mut().for_each(|entry| *entry = *entry / divisor);
        }
    }

    pub(crate) fn add_row_multiple_in_place(&mut self, dest: usize, source: usize, k: T) {
        if dest == source {
            if let Some(row) = self.row_slice_mut(dest) {
                row.iter_mut().for_each(|entry| *entry = *entry + *entry * k);
            }
            return;
        }
        if let Some((dest, source)) = self.row_pair_mut(dest, source) {
            for (entry, source_entry) in dest.iter_mut().zip(source.iter()) {
                *entry = *entry + *source_entry * k;
            }
        }
    }
}
