//! Serde support, matrices are represented as a list of rows.

use crate::{matrix::Matrix, scalar::Scalar};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

impl<T> Serialize for Matrix<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Scalar + Deserialize<'de>,
{
    /// Deserializes a list of rows, rejecting empty or ragged input.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(|err| Error::custom(err.to_string()))
    }
}
