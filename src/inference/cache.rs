//! Process-lifetime holder for loaded artifacts

use super::{Predict, Transform};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A loaded model/preprocessor pair
#[derive(Clone)]
pub struct LoadedArtifacts {
    pub model: Arc<dyn Predict>,
    pub preprocessor: Arc<dyn Transform>,
}

impl std::fmt::Debug for LoadedArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedArtifacts").finish_non_exhaustive()
    }
}

/// Read-only artifact cache, filled on first use and emptied by
/// [`invalidate`](ArtifactCache::invalidate)
#[derive(Debug, Default)]
pub struct ArtifactCache {
    slot: RwLock<Option<LoadedArtifacts>>,
    loads: AtomicU64,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached artifacts, running `load` only if the cache is empty.
    ///
    /// Concurrent callers on an empty cache wait for a single load. A failed
    /// load leaves the cache empty.
    pub fn get_or_load<E>(
        &self,
        load: impl FnOnce() -> Result<LoadedArtifacts, E>,
    ) -> Result<LoadedArtifacts, E> {
        if let Some(artifacts) = self.slot.read().as_ref() {
            tracing::debug!("Artifact cache hit");
            return Ok(artifacts.clone());
        }

        let mut slot = self.slot.write();
        if let Some(artifacts) = slot.as_ref() {
            return Ok(artifacts.clone());
        }

        let artifacts = load()?;
        self.loads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(loads = self.load_count(), "Artifact cache filled");
        *slot = Some(artifacts.clone());
        Ok(artifacts)
    }

    /// Drop the cached artifacts so the next call reloads them
    pub fn invalidate(&self) {
        if self.slot.write().take().is_some() {
            tracing::info!("Artifact cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Number of successful loads since creation
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }
}
