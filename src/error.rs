//! Error types for the scorecast prediction pipeline
//!
//! Every fallible step reports a [`PredictError`]. The public entry points
//! (`build_table`, `PredictPipeline::predict`) collapse those into a single
//! [`PipelineError`] that keeps the original cause and the place it surfaced.

use std::collections::BTreeSet;
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Result type alias for pipeline steps
pub type Result<T> = std::result::Result<T, PredictError>;

/// Failure taxonomy of the individual pipeline steps
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Deserialization error: cannot load object from {path}: {reason}")]
    Deserialization { path: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transform error: {0}")]
    Transform(String),

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PredictError {
    /// Short name of the failure kind, used as the error "type" in logs
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::Deserialization { .. } => "deserialization",
            PredictError::Validation(_) => "validation",
            PredictError::Transform(_) => "transform",
            PredictError::Prediction(_) => "prediction",
            PredictError::Data(_) => "data",
            PredictError::ShapeError { .. } => "shape",
            PredictError::Config(_) => "config",
            PredictError::Io(_) => "io",
            PredictError::Serialization(_) => "serialization",
        }
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            PredictError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<polars::error::PolarsError> for PredictError {
    fn from(err: polars::error::PolarsError) -> Self {
        PredictError::Data(err.to_string())
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::Serialization(err.to_string())
    }
}

impl From<ndarray::ShapeError> for PredictError {
    fn from(err: ndarray::ShapeError) -> Self {
        PredictError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}

/// Schema violations detected before the input reaches the preprocessor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input contains missing values (columns: {})", .columns.join(", "))]
    MissingValues { columns: Vec<String> },

    #[error("missing columns in input data: {}", format_column_set(.0))]
    MissingColumns(BTreeSet<String>),
}

fn format_column_set(columns: &BTreeSet<String>) -> String {
    let names: Vec<&str> = columns.iter().map(|s| s.as_str()).collect();
    format!("[{}]", names.join(", "))
}

/// Pipeline step in which a failure surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    BuildTable,
    LoadModel,
    LoadPreprocessor,
    Validate,
    Transform,
    Predict,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::BuildTable => "build table",
            Stage::LoadModel => "load model",
            Stage::LoadPreprocessor => "load preprocessor",
            Stage::Validate => "validate input",
            Stage::Transform => "transform",
            Stage::Predict => "predict",
        };
        f.write_str(name)
    }
}

/// The single error kind callers of the pipeline have to handle.
///
/// Wraps the underlying [`PredictError`] together with the stage and the
/// source location where it was mapped.
#[derive(Error, Debug)]
#[error(
    "pipeline failed during {stage} at {}:{}: {cause}",
    .location.file(),
    .location.line()
)]
pub struct PipelineError {
    #[source]
    cause: PredictError,
    stage: Stage,
    location: &'static Location<'static>,
}

impl PipelineError {
    /// Wrap a cause, recording the caller's location
    #[track_caller]
    pub fn new(cause: PredictError, stage: Stage) -> Self {
        let location = Location::caller();
        tracing::error!(
            stage = %stage,
            kind = cause.kind(),
            file = location.file(),
            line = location.line(),
            error = %cause,
            "Prediction pipeline failed"
        );
        Self {
            cause,
            stage,
            location,
        }
    }

    /// The original error
    pub fn cause(&self) -> &PredictError {
        &self.cause
    }

    /// Consume the wrapper and return the original error
    pub fn into_cause(self) -> PredictError {
        self.cause
    }

    /// Kind name of the original error
    pub fn kind(&self) -> &'static str {
        self.cause.kind()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Source location where the failure was wrapped
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Maps a step's failure into a [`PipelineError`] tagged with its stage
pub trait StageExt<T> {
    fn at_stage(self, stage: Stage) -> std::result::Result<T, PipelineError>;
}

impl<T, E> StageExt<T> for std::result::Result<T, E>
where
    E: Into<PredictError>,
{
    #[track_caller]
    fn at_stage(self, stage: Stage) -> std::result::Result<T, PipelineError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(PipelineError::new(err.into(), stage)),
        }
    }
}
