pub mod answers;
pub mod decision_support;
pub mod features;
pub mod pipeline;
pub mod risk;

pub use answers::{AnswerSet, Question, Section, UnknownQuestion};
pub use decision_support::Recommendation;
pub use features::{encode, matches_schema, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use pipeline::{Assessment, Assessor};
pub use risk::{
    assess, categorize, to_percent, PredictionResult, RiskCategory, HIGH_THRESHOLD,
    MODERATE_THRESHOLD,
};

use covira_model::{Classifier, ModelError, ModelHandle};
use std::path::Path;

/// Load an artifact and confirm it was trained on the encoder's schema.
///
/// Artifacts that declare `feature_names` must list exactly [`FEATURE_NAMES`];
/// artifacts without names must at least take [`FEATURE_COUNT`] inputs.
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelHandle, ModelError> {
    let path = path.as_ref();
    let model = covira_model::load(path)?;
    check_schema(path, &model)?;
    Ok(ModelHandle::new(model))
}

/// Same schema check as [`load_model`], for handles obtained from a cache.
pub fn check_schema(path: &Path, model: &dyn Classifier) -> Result<(), ModelError> {
    match model.feature_names() {
        Some(names) if !matches_schema(names) => Err(ModelError::artifact_load(
            path,
            format!("feature schema mismatch: artifact expects {names:?}, encoder produces {FEATURE_NAMES:?}"),
        )),
        _ if model.n_features() != FEATURE_COUNT => Err(ModelError::artifact_load(
            path,
            format!(
                "model takes {} features, encoder produces {FEATURE_COUNT}",
                model.n_features()
            ),
        )),
        _ => Ok(()),
    }
}
