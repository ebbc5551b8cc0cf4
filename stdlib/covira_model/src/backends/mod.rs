//! Inference backends for the classifier families an artifact can hold

pub mod forest;
pub mod logistic;

pub use forest::{ForestBackend, TreeNode};
pub use logistic::LogisticBackend;
