
use approx::assert_relative_eq;
use covira_ai::{assess, AnswerSet, Assessor, Recommendation, RiskCategory};
use covira_model::{Classifier, ModelError};
use std::sync::Arc;
use test_utils::{ShareModel, StubModel};

#[test]
fn low_probability_is_low_risk() {
    let model = StubModel::new(0, [0.95, 0.05]);
    let result = assess(&AnswerSet::default(), &model).unwrap();
    assert_eq!(result.predicted_class, 0);
    assert_relative_eq!(result.risk_probability, 5.0);
    assert_eq!(result.category(), RiskCategory::Low);
}

#[test]
fn class_comes_from_predict_not_proba() {
    let model = StubModel::new(1, [0.95, 0.05]);
    let result = assess(&AnswerSet::default(), &model).unwrap();
    assert_eq!(result.predicted_class, 1);
    assert_eq!(result.category(), RiskCategory::Low);
}

#[test]
fn mid_probability_is_moderate_risk() {
    let model = StubModel::new(1, [0.45, 0.55]);
    let result = assess(&AnswerSet::all(true), &model).unwrap();
    assert_relative_eq!(result.risk_probability, 55.0);
    assert_eq!(result.category(), RiskCategory::Moderate);
}

#[test]
fn high_probability_is_high_risk() {
    let model = StubModel::new(1, [0.1, 0.9]);
    let result = assess(&AnswerSet::all(true), &model).unwrap();
    assert_relative_eq!(result.risk_probability, 90.0);
    assert_eq!(result.category(), RiskCategory::High);
}

#[test]
fn probability_is_rounded_to_two_decimals() {
    let model = StubModel::new(0, [0.876543, 0.123457]);
    let result = assess(&AnswerSet::default(), &model).unwrap();
    assert_relative_eq!(result.risk_probability, 12.35);
}

#[test]
fn assess_is_idempotent() {
    let model = ShareModel;
    let answers = AnswerSet::from_positive_keys(["fever", "dry_cough", "contact"]).unwrap();
    let first = assess(&answers, &model).unwrap();
    let second = assess(&answers, &model).unwrap();
    assert_eq!(first, second);
    assert_relative_eq!(first.risk_probability, 30.0);
    assert_eq!(first.category(), RiskCategory::Moderate);
}

#[test]
fn inference_errors_propagate_unchanged() {
    let model = StubModel::new(0, [0.5, 0.5]).with_width(12);
    let err = assess(&AnswerSet::default(), &model).unwrap_err();
    match err {
        ModelError::Inference(msg) => assert_eq!(msg, "expected 12 features, got 10"),
        other => panic!("expected Inference, got {other:?}"),
    }
    // predict failed first, predict_proba never ran
    assert_eq!(model.calls(), 1);
}

#[test]
fn assessor_adds_category_and_recommendation() {
    let assessor = Assessor::new(Arc::new(StubModel::new(1, [0.1, 0.9])));
    let assessment = assessor.assess(&AnswerSet::all(true)).unwrap();
    assert_eq!(assessment.category, RiskCategory::High);
    assert_eq!(assessment.recommendation, Recommendation::ConsultProfessional);
    assert_eq!(assessor.model().name(), "stub");

    let json = serde_json::to_value(assessment).unwrap();
    assert_eq!(json["predicted_class"], 1);
    assert_eq!(json["risk_probability"], 90.0);
    assert_eq!(json["category"], "HIGH");
    assert_eq!(json["recommendation"], "consult_professional");
}

#[test]
fn assessor_is_shareable_across_threads() {
    let assessor = Assessor::new(Arc::new(ShareModel));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let assessor = assessor.clone();
            std::thread::spawn(move || {
                let mut answers = AnswerSet::default();
                for q in covira_ai::Question::ALL.into_iter().take(i * 2) {
                    answers.set(q, true);
                }
                assessor.assess(&answers).unwrap().result.risk_probability
            })
        })
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0.0, 20.0, 40.0, 60.0]);
}
