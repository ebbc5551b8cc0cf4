//! Error types shared by the artifact loader and the inference backends

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the model adapter.
///
/// Neither variant is recovered from locally: callers either abort
/// (`ArtifactLoad` at startup) or report an internal error (`Inference`).
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact is missing, unreadable, corrupt, or incompatible.
    #[error("failed to load model artifact '{}': {reason}", path.display())]
    ArtifactLoad { path: PathBuf, reason: String },
    /// The feature vector does not fit the model.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    pub fn artifact_load(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        ModelError::ArtifactLoad {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_artifact_load(&self) -> bool {
        matches!(self, ModelError::ArtifactLoad { .. })
    }

    pub fn is_inference(&self) -> bool {
        matches!(self, ModelError::Inference(_))
    }
}
