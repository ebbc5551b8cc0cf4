//! Logistic regression backend: p(1 | x) = sigmoid(w·x + b)

use crate::classifier::{ensure_width, ClassProbabilities, Classifier};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Binary logistic regression with one coefficient per feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticBackend {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticBackend {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, features: &[i64]) -> Result<f64, ModelError> {
        ensure_width(self.coefficients.len(), features)?;
        let dot: f64 = features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, w)| *x as f64 * w)
            .sum();
        Ok(dot + self.intercept)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic regression has no coefficients".into());
        }
        if let Some(idx) = self.coefficients.iter().position(|w| !w.is_finite()) {
            return Err(format!("coefficient {idx} is not finite"));
        }
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".into());
        }
        Ok(())
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticBackend {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[i64]) -> Result<u8, ModelError> {
        let z = self.decision_function(features)?;
        Ok(u8::from(z > 0.0))
    }

    fn predict_proba(&self, features: &[i64]) -> Result<ClassProbabilities, ModelError> {
        let p1 = sigmoid(self.decision_function(features)?);
        Ok([1.0 - p1, p1])
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
