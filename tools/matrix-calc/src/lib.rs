//! A command line calculator for dense matrices.

pub mod commands;
pub mod config;

use crate::{commands::Command, config::Config};
use anyhow::{Context, Result};
use clap::Parser;
use linear_algebra::Pivoting;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "matrix-calc", version, about = "Arithmetic, row reduction and inversion of matrices given as text.")]
pub struct Cli {
    /// The path to an optional YAML config file.
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Number of decimals in the output, overrides the config.
    #[clap(short, long, global = true)]
    pub precision: Option<usize>,

    /// Pivoting rule used by row reductions: `first-non-zero` or `partial`. Overrides the config.
    #[clap(long, global = true)]
    pub pivoting: Option<Pivoting>,

    /// The operation to run.
    #[clap(subcommand)]
    pub command: Command,
}

/// Runs the command described by `cli` and writes its result to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = Config::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.precision, cli.pivoting);
    debug!("Running {:?} with {config:?}", cli.command);
    let output = cli.command.execute(config.pivoting)?;
    writeln!(out, "{output:.precision$}", precision = config.precision)?;
    Ok(())
}

/// The driver function that parses the arguments and runs the calculator.
pub fn driver() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("matrix-calc").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn inverse() -> Result<()> {
        assert_eq!(run_args(&["inverse", "1 2:3 4"])?, "-2 1\n1.5 -0.5\n");
        Ok(())
    }

    #[test]
    fn negative_leading_entry() -> Result<()> {
        assert_eq!(run_args(&["inverse", "-1 2:3 4"])?, "-0.4 0.2\n0.3 0.1\n");
        Ok(())
    }

    #[test]
    fn precision_flag() -> Result<()> {
        assert_eq!(run_args(&["--precision", "1", "solve", "2 0 1:2 3 -4:3 2 2", "5:7:3"])?, "3.3\n-1.9\n-1.5\n");
        Ok(())
    }

    #[test]
    fn pivoting_flag() -> Result<()> {
        assert_eq!(run_args(&["echelon", "--pivoting", "partial", "0 2:1 4:3 1"])?, "1 0.333\n0 1\n0 0\n");
        Ok(())
    }

    #[test]
    fn invalid_pivoting() {
        assert!(Cli::try_parse_from(["matrix-calc", "--pivoting", "largest", "rank", "1"]).is_err());
    }

    #[test]
    fn not_square() {
        let error = run_args(&["inverse", "1 2 3:4 5 6"]).unwrap_err();
        assert_eq!(
            error.downcast_ref::<linear_algebra::MatrixError>(),
            Some(&linear_algebra::MatrixError::NotSquare { nrows: 2, ncols: 3 })
        );
    }
}
