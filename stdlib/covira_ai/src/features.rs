//! Positional encoding of an [`AnswerSet`] into the classifier's input
//!
//! The order below is a contract with the trained artifact. Artifacts that
//! declare their training schema are checked against [`FEATURE_NAMES`] when
//! loaded through [`crate::load_model`].

use crate::answers::AnswerSet;
use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 10;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "breathing",
    "fever",
    "dry_cough",
    "sore_throat",
    "hypertension",
    "abroad",
    "contact",
    "gathering",
    "public_place",
    "family_public",
];

/// Ten 0/1 integers, one per question, in [`FEATURE_NAMES`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector(pub [i64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl AsRef<[i64]> for FeatureVector {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

pub fn encode(answers: &AnswerSet) -> FeatureVector {
    FeatureVector(answers.to_array().map(i64::from))
}

/// Whether `names` is exactly the positional schema the encoder produces
pub fn matches_schema<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == FEATURE_COUNT
        && names
            .iter()
            .zip(FEATURE_NAMES)
            .all(|(n, expected)| n.as_ref() == expected)
}
