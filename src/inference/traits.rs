//! Capabilities the pipeline needs from its artifacts

use crate::error::Result;
use ndarray::{Array1, Array2};
use polars::prelude::DataFrame;

/// A fitted preprocessor: raw table in, numeric matrix out
pub trait Transform: Send + Sync {
    /// Transform `table` into a matrix with one row per table row
    fn transform(&self, table: &DataFrame) -> Result<Array2<f64>>;
}

/// A fitted model: numeric matrix in, one prediction per row out
pub trait Predict: Send + Sync {
    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>>;
}
