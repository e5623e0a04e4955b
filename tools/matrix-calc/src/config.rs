use linear_algebra::{matrix::display::DEFAULT_PRECISION, Pivoting};
use serde::Deserialize;

/// Prefix of the environment variables that override the configuration file, e.g. `MATRIX_CALC_PRECISION`.
pub const ENV_PREFIX: &str = "MATRIX_CALC";

/// The main config type.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Number of decimals used when printing matrices.
    pub precision: usize,

    /// The pivoting rule used by the row reductions.
    pub pivoting: Pivoting,
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, pivoting: Pivoting::default() }
    }
}

impl Config {
    /// Loads the config from an optional file path, then from the environment.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        builder.build()?.try_deserialize()
    }

    /// Applies the values given on the command line, they take precedence over everything else.
    pub fn with_overrides(self, precision: Option<usize>, pivoting: Option<Pivoting>) -> Self {
        Self { precision: precision.unwrap_or(self.precision), pivoting: pivoting.unwrap_or(self.pivoting) }
    }
}
