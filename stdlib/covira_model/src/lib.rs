//! Model adapter for the covira risk classifier
//!
//! Loads a pre-trained binary classifier from a JSON artifact and exposes
//! `predict` / `predict_proba` through the [`Classifier`] trait. Backends
//! cover the exported model families (logistic regression, random forest);
//! [`ModelCache`] guarantees each artifact is read at most once per process.

pub mod artifact;
pub mod backends;
pub mod cache;
pub mod classifier;
pub mod error;
pub mod metadata;

pub use artifact::{load, ClassifierSpec, LoadedModel, ModelArtifact};
pub use backends::{ForestBackend, LogisticBackend, TreeNode};
pub use cache::{ModelCache, ModelHandle};
pub use classifier::{
    ensure_width, is_distribution, ClassProbabilities, Classifier, PROBABILITY_TOLERANCE,
};
pub use error::ModelError;
pub use metadata::{ArtifactMetadata, ModelVersion};
