//! Row echelon and reduced row echelon forms.

use crate::{matrix::Matrix, scalar::Scalar};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use tracing::trace;

/// The rule used to pick a pivot during forward elimination.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Pivoting {
    /// Scan columns left to right and, within a column, rows top to bottom; the first nonzero entry is the
    /// pivot.
    #[default]
    FirstNonZero,

    /// In the first column that has a nonzero candidate, pick the candidate with the largest magnitude.
    /// Ties go to the topmost row.
    Partial,
}

/// The position of the pivot chosen for one elimination step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PivotPosition {
    /// The row the pivot currently lives in.
    pub row: usize,

    /// The pivot column.
    pub column: usize,
}

impl Pivoting {
    /// Finds the pivot for the elimination step that fills row `target`, looking only at rows `target..`.
    ///
    /// Returns `None` when every remaining entry is zero.
    pub fn find_pivot<T: Scalar>(&self, matrix: &Matrix<T>, target: usize) -> Option<PivotPosition> {
        (0..matrix.ncols()).find_map(|column| {
            let candidates =
                (target..matrix.nrows()).filter_map(|row| matrix.get(row, column).map(|value| (row, value)));
            let row = match self {
                Pivoting::FirstNonZero => candidates.filter(|(_, value)| !value.is_zero()).map(|(row, _)| row).next(),
                Pivoting::Partial => candidates
                    .filter(|(_, value)| !value.is_zero())
                    .fold(None, |best: Option<(usize, T)>, (row, value)| match best {
                        Some((_, best_value)) if best_value.abs() >= value.abs() => best,
                        _ => Some((row, value)),
                    })
                    .map(|(row, _)| row),
            };
            row.map(|row| PivotPosition { row, column })
        })
    }
}

impl Display for Pivoting {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Pivoting::FirstNonZero => write!(f, "first-non-zero"),
            Pivoting::Partial => write!(f, "partial"),
        }
    }
}

/// An unknown pivoting strategy name.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("unknown pivoting strategy '{0}', expected 'first-non-zero' or 'partial'")]
pub struct UnknownPivoting(pub String);

impl FromStr for Pivoting {
    type Err = UnknownPivoting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-non-zero" => Ok(Pivoting::FirstNonZero),
            "partial" => Ok(Pivoting::Partial),
            other => Err(UnknownPivoting(other.to_string())),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Row echelon form using the first nonzero entry as the pivot.
    ///
    /// Every nonzero row starts with a 1 strictly to the right of the leading 1 of the row above, and all
    /// zero rows are at the bottom. The shape is unchanged and the operation never fails.
    pub fn row_echelon(&self) -> Matrix<T> {
        self.row_echelon_with(Pivoting::default())
    }

    /// Row echelon form using the given pivoting rule.
    pub fn row_echelon_with(&self, pivoting: Pivoting) -> Matrix<T> {
        let mut reduced = self.clone();
        reduced.eliminate_forward(pivoting);
        reduced
    }

    /// Reduced row echelon form: row echelon form where every pivot column is zero outside its pivot row.
    pub fn reduced_row_echelon(&self) -> Matrix<T> {
        self.reduced_row_echelon_with(Pivoting::default())
    }

    /// Reduced row echelon form using the given pivoting rule for the forward pass.
    pub fn reduced_row_echelon_with(&self, pivoting: Pivoting) -> Matrix<T> {
        let mut reduced = self.row_echelon_with(pivoting);
        reduced.eliminate_backward();
        reduced
    }

    /// Number of nonzero rows in the row echelon form.
    pub fn rank(&self) -> usize {
        self.row_echelon().rows().filter(|row| row.iter().any(|value| !value.is_zero())).count()
    }

    /// The column and value of the first nonzero entry of `row`.
    pub fn leading_entry(&self, row: usize) -> Option<(usize, T)> {
        self.row_slice(row)?.iter().copied().enumerate().find(|(_, value)| !value.is_zero())
    }

    fn eliminate_forward(&mut self, pivoting: Pivoting) {
        for target in 0..self.nrows() {
            let Some(PivotPosition { row, column }) = pivoting.find_pivot(self, target) else {
                break;
            };
            trace!("Pivot for row {target} found at ({row}, {column})");
            self.swap_rows_in_place(row, target);
            if let Some(pivot) = self.get(target, column) {
                self.divide_row_in_place(target, pivot);
            }
            for below in target.saturating_add(1)..self.nrows() {
                match self.get(below, column) {
                    Some(factor) if !factor.is_zero() => self.add_row_multiple_in_place(below, target, -factor),
                    _ => continue,
                }
            }
        }
    }

    fn eliminate_backward(&mut self) {
        for current in (0..self.nrows()).rev() {
            let Some((column, leading)) = self.leading_entry(current) else {
                continue;
            };
            for above in 0..current {
                match self.get(above, column) {
                    Some(value) if !value.is_zero() => {
                        self.add_row_multiple_in_place(above, current, -(value / leading));
                    }
                    _ => continue,
                }
            }
        }
    }
}
