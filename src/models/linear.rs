//! Fitted linear regression model

use crate::error::{PredictError, Result};
use crate::inference::Predict;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Linear regression model restored from a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Fitted coefficients (weights), one per feature column
    pub coefficients: Array1<f64>,
    /// Fitted intercept (bias)
    #[serde(default)]
    pub intercept: f64,
}

impl LinearRegression {
    /// Create a model from fitted parameters
    pub fn new(coefficients: impl Into<Array1<f64>>, intercept: f64) -> Self {
        Self {
            coefficients: coefficients.into(),
            intercept,
        }
    }

    /// Number of features the model expects
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Make predictions, one per row of `x`
    pub fn predict_matrix(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::ShapeError {
                expected: format!("{} features", self.n_features()),
                actual: format!("{} features", x.ncols()),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

impl Predict for LinearRegression {
    fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>> {
        self.predict_matrix(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict() {
        let model = LinearRegression::new(vec![2.0, -1.0], 0.5);
        let x = array![[1.0, 1.0], [3.0, 2.0], [0.0, 0.0]];

        let preds = model.predict_matrix(&x).unwrap();
        assert_eq!(preds.to_vec(), vec![1.5, 4.5, 0.5]);
    }

    #[test]
    fn test_feature_count_mismatch() {
        let model = LinearRegression::new(vec![1.0, 1.0, 1.0], 0.0);
        let x = array![[1.0, 2.0]];

        let err = model.predict_matrix(&x).unwrap_err();
        assert!(matches!(err, PredictError::ShapeError { .. }));
    }

    #[test]
    fn test_intercept_defaults_to_zero() {
        let model: LinearRegression =
            serde_json::from_str(r#"{"coefficients": {"v": 1, "dim": [2], "data": [1.0, 1.0]}}"#)
                .unwrap();
        assert_eq!(model.intercept, 0.0);
        assert_eq!(model.n_features(), 2);
    }
}
