//! Pipeline configuration

use crate::error::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the persisted model artifact
pub const MODEL_FILE_NAME: &str = "model.pkl";
/// File name of the persisted preprocessor artifact
pub const PREPROCESSOR_FILE_NAME: &str = "preprocessor.pkl";
/// Directory holding both artifacts, relative to the working directory
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// How the pipeline acquires its artifacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactPolicy {
    /// Load both artifacts from disk on every prediction call
    #[default]
    ReloadEveryCall,
    /// Load lazily once and keep them until explicitly invalidated
    CacheUntilInvalidated,
}

impl ArtifactPolicy {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reload" | "reload_every_call" => Ok(ArtifactPolicy::ReloadEveryCall),
            "cache" | "cache_until_invalidated" => Ok(ArtifactPolicy::CacheUntilInvalidated),
            other => Err(PredictError::Config(format!(
                "unknown artifact policy '{}', expected 'reload' or 'cache'",
                other
            ))),
        }
    }
}

/// Configuration for the prediction pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Location of the fitted model
    pub model_path: PathBuf,

    /// Location of the fitted preprocessor
    pub preprocessor_path: PathBuf,

    /// Reload or cache artifacts between calls
    #[serde(default)]
    pub artifact_policy: ArtifactPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let dir = Path::new(DEFAULT_ARTIFACT_DIR);
        Self {
            model_path: dir.join(MODEL_FILE_NAME),
            preprocessor_path: dir.join(PREPROCESSOR_FILE_NAME),
            artifact_policy: ArtifactPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with the default artifact locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with `SCORECAST_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("SCORECAST_MODEL_PATH") {
            config.model_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("SCORECAST_PREPROCESSOR_PATH") {
            config.preprocessor_path = PathBuf::from(path);
        }
        if let Ok(policy) = std::env::var("SCORECAST_ARTIFACT_POLICY") {
            config.artifact_policy = ArtifactPolicy::parse(&policy)?;
        }

        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Save the configuration as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Builder method to set the model location
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Builder method to set the preprocessor location
    pub fn with_preprocessor_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preprocessor_path = path.into();
        self
    }

    /// Builder method to look for both artifacts under `dir`
    pub fn with_artifact_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.model_path = dir.as_ref().join(MODEL_FILE_NAME);
        self.preprocessor_path = dir.as_ref().join(PREPROCESSOR_FILE_NAME);
        self
    }

    /// Builder method to set the artifact policy
    pub fn with_artifact_policy(mut self, policy: ArtifactPolicy) -> Self {
        self.artifact_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.pkl"));
        assert_eq!(config.preprocessor_path, PathBuf::from("artifacts/preprocessor.pkl"));
        assert_eq!(config.artifact_policy, ArtifactPolicy::ReloadEveryCall);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PipelineConfig::new()
            .with_artifact_dir("/srv/models")
            .with_artifact_policy(ArtifactPolicy::CacheUntilInvalidated);

        assert_eq!(config.model_path, PathBuf::from("/srv/models/model.pkl"));
        assert_eq!(config.preprocessor_path, PathBuf::from("/srv/models/preprocessor.pkl"));
        assert_eq!(config.artifact_policy, ArtifactPolicy::CacheUntilInvalidated);

        let config = config.with_model_path("other/model.pkl");
        assert_eq!(config.model_path, PathBuf::from("other/model.pkl"));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(ArtifactPolicy::parse("reload").unwrap(), ArtifactPolicy::ReloadEveryCall);
        assert_eq!(ArtifactPolicy::parse(" Cache ").unwrap(), ArtifactPolicy::CacheUntilInvalidated);
        assert!(matches!(ArtifactPolicy::parse("sometimes"), Err(PredictError::Config(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        let config = PipelineConfig::new()
            .with_artifact_dir(dir.path())
            .with_artifact_policy(ArtifactPolicy::CacheUntilInvalidated);

        config.save(&path).unwrap();
        let loaded = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_policy_defaults_when_absent_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        std::fs::write(
            &path,
            r#"{"model_path": "m.pkl", "preprocessor_path": "p.pkl"}"#,
        )
        .unwrap();

        let loaded = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(loaded.artifact_policy, ArtifactPolicy::ReloadEveryCall);
        assert_eq!(loaded.model_path, PathBuf::from("m.pkl"));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("SCORECAST_MODEL_PATH", "/opt/scorecast/model.pkl");
        std::env::set_var("SCORECAST_ARTIFACT_POLICY", "cache");
        let config = PipelineConfig::from_env().unwrap();
        assert_eq!(config.model_path, PathBuf::from("/opt/scorecast/model.pkl"));
        assert_eq!(config.preprocessor_path, PathBuf::from("artifacts/preprocessor.pkl"));
        assert_eq!(config.artifact_policy, ArtifactPolicy::CacheUntilInvalidated);

        std::env::set_var("SCORECAST_ARTIFACT_POLICY", "bogus");
        assert!(PipelineConfig::from_env().is_err());

        std::env::remove_var("SCORECAST_MODEL_PATH");
        std::env::remove_var("SCORECAST_ARTIFACT_POLICY");
    }
}
