//! Standard scaling of numeric columns

use crate::error::{PredictError, Result};
use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A numeric input column together with its fitted scaling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    /// Mean seen during fitting
    pub mean: f64,
    /// Standard deviation seen during fitting
    pub std: f64,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, mean: f64, std: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            std,
        }
    }

    /// z-score of `value`; a zero or non-finite std leaves the centered value unscaled
    pub fn scale(&self, value: f64) -> f64 {
        let scale = if self.std == 0.0 || !self.std.is_finite() {
            1.0
        } else {
            self.std
        };
        (value - self.mean) / scale
    }

    /// Write the scaled column into `out[.., offset]`
    pub(crate) fn scale_into(
        &self,
        df: &DataFrame,
        out: &mut Array2<f64>,
        offset: usize,
    ) -> Result<()> {
        let column = df.column(&self.name).map_err(|_| {
            PredictError::Transform(format!("column '{}' not found in input", self.name))
        })?;
        let series = column.as_materialized_series();

        match series.dtype() {
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 |
            DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 |
            DataType::Float32 | DataType::Float64 => {}
            other => {
                return Err(PredictError::Data(format!(
                    "column '{}' must be numeric, found {}",
                    self.name, other
                )))
            }
        }

        let casted = series.cast(&DataType::Float64)?;
        let values = casted.f64()?;

        for (row, value) in values.into_iter().enumerate() {
            let value = value.ok_or_else(|| {
                PredictError::Data(format!("null value in column '{}' at row {}", self.name, row))
            })?;
            out[[row, offset]] = self.scale(value);
        }

        Ok(())
    }
}
