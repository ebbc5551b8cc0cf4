use covira_model::{Classifier, ModelError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::answers::AnswerSet;
use crate::decision_support::Recommendation;
use crate::risk::{assess, PredictionResult, RiskCategory};

/// Everything the presentation layer needs to render one result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub result: PredictionResult,
    pub category: RiskCategory,
    pub recommendation: Recommendation,
}

impl Assessment {
    pub fn from_result(result: PredictionResult) -> Self {
        Self {
            category: result.category(),
            recommendation: Recommendation::for_prediction(&result),
            result,
        }
    }
}

/// Runs assessments against an injected model handle.
///
/// Holds no per-request state; clones share the same model.
#[derive(Clone)]
pub struct Assessor {
    model: Arc<dyn Classifier>,
}

impl Assessor {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn Classifier {
        self.model.as_ref()
    }

    pub fn assess(&self, answers: &AnswerSet) -> Result<Assessment, ModelError> {
        let result = assess(answers, self.model.as_ref())?;
        Ok(Assessment::from_result(result))
    }
}

impl std::fmt::Debug for Assessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assessor")
            .field("model", &self.model.name())
            .finish()
    }
}
