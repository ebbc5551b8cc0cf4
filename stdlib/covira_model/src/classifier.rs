//! Capability trait for binary classifiers

use crate::error::ModelError;

/// Class-probability pair `[p_negative, p_positive]`
pub type ClassProbabilities = [f64; 2];

/// Tolerance used when checking that a distribution sums to one
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A pre-trained binary classifier.
///
/// Implementations never mutate themselves during inference, so a single
/// loaded instance can be shared across threads behind an `Arc`.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    /// Discrete class, `0` or `1`
    fn predict(&self, features: &[i64]) -> Result<u8, ModelError>;

    /// Probability distribution over the two classes
    fn predict_proba(&self, features: &[i64]) -> Result<ClassProbabilities, ModelError>;

    /// Human-readable identifier, used in logs
    fn name(&self) -> &str {
        "classifier"
    }

    /// Positional training schema, when the model carries one
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

/// Reject vectors whose width does not match the model.
pub fn ensure_width(expected: usize, features: &[i64]) -> Result<(), ModelError> {
    if features.len() != expected {
        return Err(ModelError::Inference(format!(
            "expected {expected} features, got {}",
            features.len()
        )));
    }
    Ok(())
}

/// Check that `proba` is a valid two-class distribution.
pub fn is_distribution(proba: &ClassProbabilities) -> bool {
    proba.iter().all(|p| p.is_finite() && *p >= 0.0)
        && (proba[0] + proba[1] - 1.0).abs() <= PROBABILITY_TOLERANCE
}

impl<C: Classifier + ?Sized> Classifier for std::sync::Arc<C> {
    fn n_features(&self) -> usize {
        (**self).n_features()
    }

    fn predict(&self, features: &[i64]) -> Result<u8, ModelError> {
        (**self).predict(features)
    }

    fn predict_proba(&self, features: &[i64]) -> Result<ClassProbabilities, ModelError> {
        (**self).predict_proba(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn feature_names(&self) -> Option<&[String]> {
        (**self).feature_names()
    }
}
