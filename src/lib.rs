//! scorecast - Student exam score prediction at inference time
//!
//! Loads a previously fitted preprocessor and model from persisted artifacts,
//! validates raw tabular input against the expected schema, transforms it and
//! predicts. Fitting both artifacts happens elsewhere.
//!
//! # Modules
//!
//! - [`data`] - Student records and the record-to-table builder
//! - [`inference`] - Prediction pipeline, artifact loading, input validation
//! - [`preprocessing`] - Fitted column preprocessor (scaling, one-hot encoding)
//! - [`models`] - Fitted models
//! - [`config`] - Pipeline configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```no_run
//! use scorecast::prelude::*;
//!
//! let record = StudentRecord::new(
//!     "female", "group B", "bachelor's degree", "standard", "none", 72, 74,
//! );
//! let table = record.build_table()?;
//! let predictions = PredictPipeline::new().predict(&table)?;
//! # Ok::<(), scorecast::PipelineError>(())
//! ```

// Core error handling
pub mod error;

pub mod config;
pub mod logging;

pub mod data;
pub mod preprocessing;
pub mod models;
pub mod inference;

pub use error::{PipelineError, PredictError, Result, Stage, StageExt, ValidationError};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{PipelineError, PredictError, Stage, ValidationError};

    // Configuration
    pub use crate::config::{ArtifactPolicy, PipelineConfig};

    // Input
    pub use crate::data::{build_table_from_records, StudentRecord, REQUIRED_COLUMNS};

    // Inference
    pub use crate::inference::{
        load_object, save_object, ArtifactLoader, FileArtifactLoader, Predict, PredictPipeline,
        Transform,
    };

    // Artifacts
    pub use crate::models::LinearRegression;
    pub use crate::preprocessing::ColumnPreprocessor;
}
