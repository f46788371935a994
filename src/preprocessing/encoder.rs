//! One-hot encoding of categorical columns

use crate::error::{PredictError, Result};
use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A categorical input column and the categories seen during fitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub name: String,
    /// Output slot order of the one-hot block
    pub categories: Vec<String>,
}

impl CategoricalColumn {
    pub fn new<I, S>(name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Width of the one-hot block
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Names of the generated indicator features, `<column>_<category>`
    pub fn feature_names(&self) -> impl Iterator<Item = String> + '_ {
        self.categories
            .iter()
            .map(move |category| format!("{}_{}", self.name, category))
    }

    fn slot(&self, value: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == value)
    }

    /// Write the one-hot block into `out[.., offset..offset + width]`
    pub(crate) fn encode_into(
        &self,
        df: &DataFrame,
        out: &mut Array2<f64>,
        offset: usize,
    ) -> Result<()> {
        let column = df.column(&self.name).map_err(|_| {
            PredictError::Transform(format!("column '{}' not found in input", self.name))
        })?;
        let values = column
            .as_materialized_series()
            .str()
            .map_err(|e| PredictError::Data(e.to_string()))?;

        for (row, value) in values.into_iter().enumerate() {
            let value = value.ok_or_else(|| {
                PredictError::Data(format!("null value in column '{}' at row {}", self.name, row))
            })?;
            let slot = self.slot(value).ok_or_else(|| {
                PredictError::Transform(format!(
                    "unknown category '{}' in column '{}'",
                    value, self.name
                ))
            })?;
            out[[row, offset + slot]] = 1.0;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> CategoricalColumn {
        CategoricalColumn::new("lunch", ["free/reduced", "standard"])
    }

    #[test]
    fn test_feature_names() {
        let names: Vec<String> = lunch().feature_names().collect();
        assert_eq!(names, vec!["lunch_free/reduced", "lunch_standard"]);
    }

    #[test]
    fn test_encode_into_sets_one_slot_per_row() {
        let df = DataFrame::new(vec![Column::new(
            "lunch".into(),
            &["standard", "free/reduced", "standard"],
        )])
        .unwrap();
        let mut out = Array2::zeros((3, 3));

        lunch().encode_into(&df, &mut out, 1).unwrap();
        assert_eq!(out.row(0).to_vec(), vec![0.0, 0.0, 1.0]);
        assert_eq!(out.row(1).to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(out.row(2).to_vec(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_category_fails() {
        let df = DataFrame::new(vec![Column::new("lunch".into(), &["deluxe"])]).unwrap();
        let mut out = Array2::zeros((1, 2));

        let err = lunch().encode_into(&df, &mut out, 0).unwrap_err();
        match err {
            PredictError::Transform(msg) => assert!(msg.contains("deluxe")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_numeric_column_is_data_error() {
        let df = DataFrame::new(vec![Column::new("lunch".into(), &[1i64])]).unwrap();
        let mut out = Array2::zeros((1, 2));

        let err = lunch().encode_into(&df, &mut out, 0).unwrap_err();
        assert!(matches!(err, PredictError::Data(_)));
    }
}
