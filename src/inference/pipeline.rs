//! Prediction service
//!
//! One call runs the whole flow: acquire artifacts, validate the input table,
//! transform it, predict. Every failure on the way comes back as a single
//! [`PipelineError`]; there are no partial results and no retries.

use super::artifacts::{ArtifactLoader, FileArtifactLoader};
use super::cache::{ArtifactCache, LoadedArtifacts};
use super::validation::validate_table;
use crate::config::{ArtifactPolicy, PipelineConfig};
use crate::data::{build_table_from_records, StudentRecord};
use crate::error::{PipelineError, PredictError, Stage, StageExt};
use polars::prelude::DataFrame;

fn check_row_count(actual: usize, expected: usize, what: &str) -> crate::error::Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(PredictError::ShapeError {
            expected: format!("{} {} rows", expected, what),
            actual: format!("{} {} rows", actual, what),
        })
    }
}

/// Loads the fitted preprocessor and model and predicts on input tables
pub struct PredictPipeline {
    config: PipelineConfig,
    loader: Box<dyn ArtifactLoader>,
    cache: ArtifactCache,
}

impl std::fmt::Debug for PredictPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictPipeline")
            .field("config", &self.config)
            .field("artifacts_cached", &self.cache.is_loaded())
            .finish()
    }
}

impl Default for PredictPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictPipeline {
    /// Pipeline over the default artifact locations
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Pipeline reading JSON artifacts from the configured paths
    pub fn with_config(config: PipelineConfig) -> Self {
        Self::with_loader(config, FileArtifactLoader)
    }

    /// Pipeline acquiring its artifacts through `loader`
    pub fn with_loader(config: PipelineConfig, loader: impl ArtifactLoader + 'static) -> Self {
        Self {
            config,
            loader: Box::new(loader),
            cache: ArtifactCache::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Forget cached artifacts; the next call loads them again.
    /// No effect under [`ArtifactPolicy::ReloadEveryCall`].
    pub fn invalidate_artifacts(&self) {
        self.cache.invalidate();
    }

    /// Predict one value per row of `table`, in row order
    pub fn predict(&self, table: &DataFrame) -> Result<Vec<f64>, PipelineError> {
        let artifacts = self.acquire_artifacts()?;

        tracing::info!("Features before transformation:\n{}", table);
        validate_table(table).at_stage(Stage::Validate)?;

        let features = artifacts
            .preprocessor
            .transform(table)
            .at_stage(Stage::Transform)?;
        check_row_count(features.nrows(), table.height(), "transformed")
            .at_stage(Stage::Transform)?;
        tracing::info!("Features after transformation:\n{}", features);

        let predictions = artifacts
            .model
            .predict(&features)
            .at_stage(Stage::Predict)?;
        check_row_count(predictions.len(), features.nrows(), "predicted")
            .at_stage(Stage::Predict)?;

        tracing::info!(rows = predictions.len(), "Prediction complete");
        Ok(predictions.to_vec())
    }

    /// Build a one-row table from `record` and predict on it
    pub fn predict_record(&self, record: &StudentRecord) -> Result<f64, PipelineError> {
        let table = record.build_table()?;
        let predictions = self.predict(&table)?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictError::Prediction("model returned no prediction".to_string()))
            .at_stage(Stage::Predict)
    }

    /// Build a table from `records` and predict on it, one value per record
    pub fn predict_records(&self, records: &[StudentRecord]) -> Result<Vec<f64>, PipelineError> {
        let table = build_table_from_records(records)?;
        self.predict(&table)
    }

    fn acquire_artifacts(&self) -> Result<LoadedArtifacts, PipelineError> {
        match self.config.artifact_policy {
            ArtifactPolicy::ReloadEveryCall => self.load_artifacts(),
            ArtifactPolicy::CacheUntilInvalidated => self.cache.get_or_load(|| self.load_artifacts()),
        }
    }

    fn load_artifacts(&self) -> Result<LoadedArtifacts, PipelineError> {
        tracing::info!(
            model = %self.config.model_path.display(),
            preprocessor = %self.config.preprocessor_path.display(),
            "Loading model and preprocessor"
        );

        let model = self
            .loader
            .load_model(&self.config.model_path)
            .at_stage(Stage::LoadModel)?;
        let preprocessor = self
            .loader
            .load_preprocessor(&self.config.preprocessor_path)
            .at_stage(Stage::LoadPreprocessor)?;

        Ok(LoadedArtifacts {
            model,
            preprocessor,
        })
    }
}
