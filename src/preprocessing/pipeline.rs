//! Fitted column preprocessor

use super::{CategoricalColumn, NumericColumn};
use crate::error::{PredictError, Result};
use crate::inference::Transform;
use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Fitted preprocessor turning a raw input table into the model's feature matrix.
///
/// Output columns are the standardized numeric columns (declared order)
/// followed by one one-hot block per categorical column (declared order).
/// Columns of the input table that are not declared here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnPreprocessor {
    numeric: Vec<NumericColumn>,
    categorical: Vec<CategoricalColumn>,
}

impl ColumnPreprocessor {
    /// Create an empty preprocessor
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a standardized numeric column
    pub fn with_numeric(mut self, name: impl Into<String>, mean: f64, std: f64) -> Self {
        self.numeric.push(NumericColumn::new(name, mean, std));
        self
    }

    /// Builder method to append a one-hot encoded categorical column
    pub fn with_categorical<I, S>(mut self, name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categorical.push(CategoricalColumn::new(name, categories));
        self
    }

    pub fn numeric_columns(&self) -> &[NumericColumn] {
        &self.numeric
    }

    pub fn categorical_columns(&self) -> &[CategoricalColumn] {
        &self.categorical
    }

    /// Number of columns produced by [`transform_frame`](Self::transform_frame)
    pub fn n_features_out(&self) -> usize {
        self.numeric.len() + self.categorical.iter().map(|c| c.width()).sum::<usize>()
    }

    /// Output feature names, in matrix column order
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.numeric.iter().map(|c| c.name.clone()).collect();
        for column in &self.categorical {
            names.extend(column.feature_names());
        }
        names
    }

    /// Transform the table into a dense feature matrix, one row per input row
    pub fn transform_frame(&self, df: &DataFrame) -> Result<Array2<f64>> {
        if self.n_features_out() == 0 {
            return Err(PredictError::Transform(
                "preprocessor declares no input columns".to_string(),
            ));
        }

        let mut out = Array2::zeros((df.height(), self.n_features_out()));
        let mut offset = 0;

        for column in &self.numeric {
            column.scale_into(df, &mut out, offset)?;
            offset += 1;
        }

        for column in &self.categorical {
            column.encode_into(df, &mut out, offset)?;
            offset += column.width();
        }

        Ok(out)
    }
}

impl Transform for ColumnPreprocessor {
    fn transform(&self, table: &DataFrame) -> Result<Array2<f64>> {
        self.transform_frame(table)
    }
}
