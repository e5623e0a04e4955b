use anyhow::{Context, Result};
use clap::Subcommand;
use linear_algebra::{Matrix, Pivoting};
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// The operations the calculator knows about.
///
/// Matrices are given as text: rows separated by newlines, colons or pipes and columns by spaces, tabs or
/// commas, e.g. `"|3,2,-1|2,0,-1|0,1,2|"`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Row echelon form.
    Echelon {
        /// The matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Reduced row echelon form.
    Reduce {
        /// The matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Inverse of a square matrix.
    Inverse {
        /// The matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Transposed matrix.
    Transpose {
        /// The matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Rank of a matrix.
    Rank {
        /// The matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Matrix product `left * right`.
    Multiply {
        /// The left operand.
        #[clap(allow_hyphen_values = true)]
        left: String,

        /// The right operand.
        #[clap(allow_hyphen_values = true)]
        right: String,
    },

    /// Entry-wise sum.
    Add {
        /// The left operand.
        #[clap(allow_hyphen_values = true)]
        left: String,

        /// The right operand.
        #[clap(allow_hyphen_values = true)]
        right: String,
    },

    /// Entry-wise difference `left - right`.
    Subtract {
        /// The left operand.
        #[clap(allow_hyphen_values = true)]
        left: String,

        /// The right operand.
        #[clap(allow_hyphen_values = true)]
        right: String,
    },

    /// Solves `matrix * x = rhs` for `x`.
    Solve {
        /// The square coefficient matrix.
        #[clap(allow_hyphen_values = true)]
        matrix: String,

        /// The right hand side, one column per system.
        #[clap(allow_hyphen_values = true)]
        rhs: String,
    },
}

/// The result of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A matrix.
    Matrix(Matrix<f64>),

    /// A count, e.g. the rank.
    Count(usize),
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Output::Matrix(matrix) => match f.precision() {
                Some(precision) => write!(f, "{matrix:.precision$}"),
                None => write!(f, "{matrix}"),
            },
            Output::Count(count) => write!(f, "{count}"),
        }
    }
}

impl Command {
    /// Runs the command.
    pub fn execute(&self, pivoting: Pivoting) -> Result<Output> {
        let output = match self {
            Command::Echelon { matrix } => Output::Matrix(parse("input", matrix)?.row_echelon_with(pivoting)),
            Command::Reduce { matrix } => Output::Matrix(parse("input", matrix)?.reduced_row_echelon_with(pivoting)),
            Command::Inverse { matrix } => {
                let matrix = parse("input", matrix)?;
                Output::Matrix(matrix.inverse_with(pivoting).context("failed to invert matrix")?)
            }
            Command::Transpose { matrix } => Output::Matrix(parse("input", matrix)?.transpose()),
            Command::Rank { matrix } => Output::Count(parse("input", matrix)?.rank()),
            Command::Multiply { left, right } => {
                let (left, right) = (parse("left", left)?, parse("right", right)?);
                Output::Matrix(left.multiply(&right).context("failed to multiply matrices")?)
            }
            Command::Add { left, right } => {
                let (left, right) = (parse("left", left)?, parse("right", right)?);
                Output::Matrix(left.add(&right).context("failed to add matrices")?)
            }
            Command::Subtract { left, right } => {
                let (left, right) = (parse("left", left)?, parse("right", right)?);
                Output::Matrix(left.subtract(&right).context("failed to subtract matrices")?)
            }
            Command::Solve { matrix, rhs } => {
                let (matrix, rhs) = (parse("coefficient", matrix)?, parse("right hand side", rhs)?);
                Output::Matrix(matrix.solve_with(&rhs, pivoting).context("failed to solve system")?)
            }
        };
        Ok(output)
    }
}

fn parse(name: &str, text: &str) -> Result<Matrix<f64>> {
    let matrix: Matrix<f64> = text.parse().with_context(|| format!("invalid {name} matrix"))?;
    debug!("Parsed {name} matrix with shape {:?}", matrix.shape());
    Ok(matrix)
}
