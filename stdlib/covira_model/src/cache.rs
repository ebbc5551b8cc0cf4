//! Load-once store of shared model handles

use crate::artifact::{load, LoadedModel};
use crate::error::ModelError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared, read-only handle to a loaded artifact
pub type ModelHandle = Arc<LoadedModel>;

/// Thread-safe cache keyed by artifact path.
///
/// Each path is read from disk at most once; later requests receive a clone
/// of the same handle. Entries are never reloaded or evicted. Failed loads
/// leave no entry behind, so the next request reads the file again.
#[derive(Default)]
pub struct ModelCache {
    models: RwLock<HashMap<PathBuf, ModelHandle>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle for `path`, loading it on first use.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<ModelHandle, ModelError> {
        let path = path.as_ref();
        if let Some(handle) = self.models.read().get(path) {
            return Ok(Arc::clone(handle));
        }

        let mut models = self.models.write();
        // Another caller may have loaded it while we waited for the write lock.
        if let Some(handle) = models.get(path) {
            return Ok(Arc::clone(handle));
        }
        let handle = Arc::new(load(path)?);
        log::info!(
            "model '{}' v{} cached from {}",
            handle.metadata().name,
            handle.metadata().version,
            path.display()
        );
        models.insert(path.to_path_buf(), Arc::clone(&handle));
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ARTIFACT: &str = r#"{
        "metadata": {"name": "cached", "version": "1.0.0"},
        "classifier": {"kind": "logistic_regression", "coefficients": [0.5], "intercept": 0.0}
    }"#;

    #[test]
    fn second_request_reuses_the_handle() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("model.json");
        fs::write(&path, ARTIFACT).expect("write");

        let cache = ModelCache::new();
        assert!(cache.models.read().is_empty());
        let first = cache.get_or_load(&path).expect("first load");

        // The file is gone but the cached handle is still served.
        fs::remove_file(&path).expect("remove");
        let second = cache.get_or_load(&path).expect("cached load");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.models.read().len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("late.json");

        let cache = ModelCache::new();
        assert!(cache.get_or_load(&path).unwrap_err().is_artifact_load());
        assert!(cache.models.read().is_empty());

        fs::write(&path, ARTIFACT).expect("write");
        let handle = cache.get_or_load(&path).expect("load after file appears");
        assert_eq!(handle.metadata().name, "cached");
    }
}
