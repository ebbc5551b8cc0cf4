use covira_model::{Classifier, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answers::AnswerSet;
use crate::features::encode;

/// Lower bound (inclusive) of the MODERATE band, in percent
pub const MODERATE_THRESHOLD: f64 = 30.0;
/// Lower bound (inclusive) of the HIGH band, in percent
pub const HIGH_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Discrete model output, 1 is the positive class
    pub predicted_class: u8,
    /// Positive-class probability as a percentage, two decimals
    pub risk_probability: f64,
}

impl PredictionResult {
    pub fn category(&self) -> RiskCategory {
        categorize(self.risk_probability)
    }

    pub fn is_positive(&self) -> bool {
        self.predicted_class == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW RISK",
            RiskCategory::Moderate => "MODERATE RISK",
            RiskCategory::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a risk percentage onto its band.
///
/// Bands are half-open: `[0, 30)` LOW, `[30, 70)` MODERATE, `[70, 100]` HIGH.
/// A NaN compares false against both bounds and lands in HIGH.
pub fn categorize(risk_probability: f64) -> RiskCategory {
    if risk_probability < MODERATE_THRESHOLD {
        RiskCategory::Low
    } else if risk_probability < HIGH_THRESHOLD {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

/// Scale a probability to a percentage rounded to two decimals.
///
/// Rounding goes through the exact decimal value of `probability * 100`,
/// ties to even, so `0.00085` (stored just below `0.085%`) gives `0.08`.
pub fn to_percent(probability: f64) -> f64 {
    let percent = probability * 100.0;
    if !percent.is_finite() {
        return percent;
    }
    format!("{percent:.2}").parse().unwrap_or(percent)
}

/// Encode, run both inference calls, and scale the positive-class probability.
///
/// Model errors are returned as-is.
pub fn assess<M>(answers: &AnswerSet, model: &M) -> Result<PredictionResult, ModelError>
where
    M: Classifier + ?Sized,
{
    let vector = encode(answers);
    let predicted_class = model.predict(vector.as_slice())?;
    let probabilities = model.predict_proba(vector.as_slice())?;
    let risk_probability = to_percent(probabilities[1]);
    log::debug!(
        "model '{}' on {:?}: class {predicted_class}, p1 {:.6} -> {risk_probability}%",
        model.name(),
        vector.0,
        probabilities[1]
    );
    Ok(PredictionResult {
        predicted_class,
        risk_probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_half_open() {
        assert_eq!(categorize(0.0), RiskCategory::Low);
        assert_eq!(categorize(29.99), RiskCategory::Low);
        assert_eq!(categorize(30.0), RiskCategory::Moderate);
        assert_eq!(categorize(69.99), RiskCategory::Moderate);
        assert_eq!(categorize(70.0), RiskCategory::High);
        assert_eq!(categorize(100.0), RiskCategory::High);
    }

    #[test]
    fn nan_is_high() {
        assert_eq!(categorize(f64::NAN), RiskCategory::High);
    }

    #[test]
    fn percent_rounding() {
        assert_eq!(to_percent(0.05), 5.0);
        assert_eq!(to_percent(0.55), 55.0);
        assert_eq!(to_percent(0.123456), 12.35);
        assert_eq!(to_percent(0.98766), 98.77);
        assert_eq!(to_percent(1.0), 100.0);
        assert_eq!(to_percent(0.0), 0.0);
    }

    #[test]
    fn percent_rounding_uses_the_stored_value() {
        assert_eq!(to_percent(0.00015), 0.01);
        assert_eq!(to_percent(0.00125), 0.12);
        assert_eq!(to_percent(0.00085), 0.08);
    }

    #[test]
    fn non_finite_probability_passes_through() {
        assert!(to_percent(f64::NAN).is_nan());
        assert_eq!(to_percent(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn labels_and_serialization() {
        assert_eq!(RiskCategory::Moderate.to_string(), "MODERATE RISK");
        assert_eq!(
            serde_json::to_string(&RiskCategory::High).unwrap(),
            "\"HIGH\""
        );
    }
}
