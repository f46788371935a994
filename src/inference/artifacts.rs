//! Artifact persistence and loading

use super::{Predict, Transform};
use crate::error::{PredictError, Result};
use crate::models::LinearRegression;
use crate::preprocessing::ColumnPreprocessor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

fn deserialization_error(path: &Path, reason: impl Display) -> PredictError {
    PredictError::Deserialization {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Load a persisted object.
///
/// A missing, unreadable or undecodable file is a
/// [`PredictError::Deserialization`].
pub fn load_object<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| deserialization_error(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| deserialization_error(path, e))
}

/// Persist an object as JSON, creating parent directories as needed
pub fn save_object<T: Serialize>(path: impl AsRef<Path>, object: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(object)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Source of the two artifacts the pipeline runs on
pub trait ArtifactLoader: Send + Sync {
    fn load_model(&self, path: &Path) -> Result<Arc<dyn Predict>>;

    fn load_preprocessor(&self, path: &Path) -> Result<Arc<dyn Transform>>;
}

/// Loads a [`LinearRegression`] and a [`ColumnPreprocessor`] from JSON files
#[derive(Debug, Clone, Copy, Default)]
pub struct FileArtifactLoader;

impl ArtifactLoader for FileArtifactLoader {
    fn load_model(&self, path: &Path) -> Result<Arc<dyn Predict>> {
        let model: LinearRegression = load_object(path)?;
        tracing::debug!(path = %path.display(), n_features = model.n_features(), "Model loaded");
        Ok(Arc::new(model))
    }

    fn load_preprocessor(&self, path: &Path) -> Result<Arc<dyn Transform>> {
        let preprocessor: ColumnPreprocessor = load_object(path)?;
        tracing::debug!(
            path = %path.display(),
            n_features_out = preprocessor.n_features_out(),
            "Preprocessor loaded"
        );
        Ok(Arc::new(preprocessor))
    }
}
