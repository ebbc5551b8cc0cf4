pub mod config;
pub mod form;
pub mod locale;
pub mod render;

use std::path::Path;

use covira_model::{ModelCache, ModelError, ModelHandle};

/// Fetch the artifact through `cache` and verify it matches the encoder's schema.
pub fn open_model(cache: &ModelCache, path: &Path) -> Result<ModelHandle, ModelError> {
    let handle = cache.get_or_load(path)?;
    covira_ai::check_schema(path, &*handle)?;
    Ok(handle)
}

/// Process exit code for a model adapter failure
pub fn exit_code(err: &ModelError) -> i32 {
    match err {
        ModelError::ArtifactLoad { .. } => 2,
        ModelError::Inference(_) => 1,
    }
}
