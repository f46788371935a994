//! Inference module
//!
//! Provides the prediction service and everything it runs on:
//! - `Transform`/`Predict` capabilities implemented by fitted artifacts
//! - JSON artifact persistence (`load_object`/`save_object`)
//! - Pluggable artifact loading and an optional process-wide artifact cache
//! - Input schema validation
//! - The `PredictPipeline` orchestrating load → validate → transform → predict

mod artifacts;
mod cache;
mod pipeline;
mod traits;
mod validation;

pub use artifacts::{load_object, save_object, ArtifactLoader, FileArtifactLoader};
pub use cache::{ArtifactCache, LoadedArtifacts};
pub use pipeline::PredictPipeline;
pub use traits::{Predict, Transform};
pub use validation::{check_missing_values, check_required_columns, validate_table};
