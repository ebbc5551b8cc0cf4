//! Serialized classifier artifact and its loader
//!
//! An artifact is a JSON document with a metadata header and the exported
//! parameters of one classifier family:
//!
//! ```json
//! {
//!   "metadata": { "name": "covid-lr", "version": "1.0.0", "feature_names": ["fever"] },
//!   "classifier": { "kind": "logistic_regression", "coefficients": [1.2], "intercept": -0.4 }
//! }
//! ```

use crate::backends::{ForestBackend, LogisticBackend};
use crate::classifier::{ClassProbabilities, Classifier};
use crate::error::ModelError;
use crate::metadata::ArtifactMetadata;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Exported parameters, tagged by classifier family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierSpec {
    LogisticRegression(LogisticBackend),
    RandomForest(ForestBackend),
}

impl ClassifierSpec {
    fn as_classifier(&self) -> &dyn Classifier {
        match self {
            ClassifierSpec::LogisticRegression(m) => m as &dyn Classifier,
            ClassifierSpec::RandomForest(m) => m as &dyn Classifier,
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            ClassifierSpec::LogisticRegression(m) => m.validate(),
            ClassifierSpec::RandomForest(m) => m.validate(),
        }
    }
}

/// On-disk representation of a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ArtifactMetadata,
    pub classifier: ClassifierSpec,
}

impl ModelArtifact {
    pub fn new(metadata: ArtifactMetadata, classifier: ClassifierSpec) -> Self {
        Self {
            metadata,
            classifier,
        }
    }

    /// Check that the parameters are usable and agree with the metadata.
    pub fn validate(&self) -> Result<(), String> {
        self.classifier.validate()?;
        let width = self.classifier.as_classifier().n_features();
        let names = &self.metadata.feature_names;
        if !names.is_empty() && names.len() != width {
            return Err(format!(
                "metadata lists {} feature names but the classifier expects {width} features",
                names.len()
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A validated artifact, ready for inference
#[derive(Debug, Clone)]
pub struct LoadedModel {
    artifact: ModelArtifact,
}

impl LoadedModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, String> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.artifact.metadata
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Classifier family, as written in the artifact's `kind` tag
    pub fn kind(&self) -> &str {
        self.artifact.classifier.as_classifier().name()
    }
}

impl Classifier for LoadedModel {
    fn n_features(&self) -> usize {
        self.artifact.classifier.as_classifier().n_features()
    }

    fn predict(&self, features: &[i64]) -> Result<u8, ModelError> {
        self.artifact.classifier.as_classifier().predict(features)
    }

    fn predict_proba(&self, features: &[i64]) -> Result<ClassProbabilities, ModelError> {
        self.artifact.classifier.as_classifier().predict_proba(features)
    }

    fn name(&self) -> &str {
        &self.artifact.metadata.name
    }

    fn feature_names(&self) -> Option<&[String]> {
        let names = &self.artifact.metadata.feature_names;
        (!names.is_empty()).then_some(names.as_slice())
    }
}

/// Read and validate the artifact at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedModel, ModelError> {
    let path = path.as_ref();
    let text = read_to_string(path).map_err(|e| ModelError::artifact_load(path, e.to_string()))?;
    let artifact: ModelArtifact = serde_json::from_str(&text)
        .map_err(|e| ModelError::artifact_load(path, format!("malformed artifact: {e}")))?;
    let model = LoadedModel::from_artifact(artifact)
        .map_err(|reason| ModelError::artifact_load(path, format!("incompatible artifact: {reason}")))?;
    log::debug!(
        "loaded {} artifact '{}' v{} from {}",
        model.kind(),
        model.metadata().name,
        model.metadata().version,
        path.display()
    );
    Ok(model)
}
