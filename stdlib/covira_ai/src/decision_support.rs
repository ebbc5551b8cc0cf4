use serde::{Deserialize, Serialize};

use crate::risk::PredictionResult;

/// Follow-up advice, driven by the discrete prediction rather than the band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ConsultProfessional,
    ContinuePrecautions,
}

impl Recommendation {
    pub fn for_prediction(result: &PredictionResult) -> Self {
        if result.is_positive() {
            Recommendation::ConsultProfessional
        } else {
            Recommendation::ContinuePrecautions
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Recommendation::ConsultProfessional => "High Risk: COVID-19 Positive",
            Recommendation::ContinuePrecautions => "Low Risk: COVID-19 Negative",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::ConsultProfessional => {
                "Please consult a medical professional immediately."
            }
            Recommendation::ContinuePrecautions => "Continue safety precautions.",
        }
    }
}
