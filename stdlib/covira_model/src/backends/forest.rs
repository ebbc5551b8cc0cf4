//! Random forest backend: averaged class distributions of decision trees

use crate::classifier::{ensure_width, is_distribution, ClassProbabilities, Classifier};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// A node of an exported decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Go left iff `x[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf { proba: ClassProbabilities },
}

impl TreeNode {
    pub fn leaf(p_negative: f64, p_positive: f64) -> Self {
        TreeNode::Leaf {
            proba: [p_negative, p_positive],
        }
    }

    pub fn split(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> Self {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn traverse(&self, features: &[i64]) -> &ClassProbabilities {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { proba } => return proba,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if (features[*feature] as f64) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf { proba } => {
                    if !is_distribution(proba) {
                        return Err(format!("leaf distribution {proba:?} is not a probability"));
                    }
                }
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "split on feature {feature} but the model has {n_features} features"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("split on feature {feature} has a non-finite threshold"));
                    }
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        Ok(())
    }
}

/// Ensemble of decision trees trained on `n_features` inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestBackend {
    pub n_features: usize,
    pub trees: Vec<TreeNode>,
}

impl ForestBackend {
    pub fn new(n_features: usize, trees: Vec<TreeNode>) -> Self {
        Self { n_features, trees }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("random forest declares zero features".into());
        }
        if self.trees.is_empty() {
            return Err("random forest has no trees".into());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|reason| format!("tree {idx}: {reason}"))?;
        }
        Ok(())
    }
}

impl Classifier for ForestBackend {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[i64]) -> Result<u8, ModelError> {
        let proba = self.predict_proba(features)?;
        Ok(u8::from(proba[1] > proba[0]))
    }

    fn predict_proba(&self, features: &[i64]) -> Result<ClassProbabilities, ModelError> {
        ensure_width(self.n_features, features)?;
        if self.trees.is_empty() {
            return Err(ModelError::Inference("random forest has no trees".into()));
        }
        let mut sum = [0.0; 2];
        for tree in &self.trees {
            let p = tree.traverse(features);
            sum[0] += p[0];
            sum[1] += p[1];
        }
        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }

    fn name(&self) -> &str {
        "random_forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stump(feature: usize, left: f64, right: f64) -> TreeNode {
        TreeNode::split(
            feature,
            0.5,
            TreeNode::leaf(1.0 - left, left),
            TreeNode::leaf(1.0 - right, right),
        )
    }

    #[test]
    fn averages_tree_distributions() {
        let forest = ForestBackend::new(2, vec![stump(0, 0.2, 0.8), stump(1, 0.1, 0.6)]);
        let proba = forest.predict_proba(&[1, 0]).unwrap();
        // (0.8 + 0.1) / 2
        assert_relative_eq!(proba[1], 0.45, epsilon = 1e-12);
        assert_relative_eq!(proba[0] + proba[1], 1.0, epsilon = 1e-12);
        assert_eq!(forest.predict(&[1, 0]).unwrap(), 0);
        assert_eq!(forest.predict(&[1, 1]).unwrap(), 1);
    }

    #[test]
    fn ties_resolve_to_negative_class() {
        let forest = ForestBackend::new(1, vec![TreeNode::leaf(0.5, 0.5)]);
        assert_eq!(forest.predict(&[1]).unwrap(), 0);
    }

    #[test]
    fn nested_splits_follow_thresholds() {
        let tree = TreeNode::split(
            0,
            0.5,
            TreeNode::leaf(0.9, 0.1),
            TreeNode::split(1, 0.5, TreeNode::leaf(0.6, 0.4), TreeNode::leaf(0.2, 0.8)),
        );
        let forest = ForestBackend::new(2, vec![tree]);
        assert_relative_eq!(forest.predict_proba(&[0, 1]).unwrap()[1], 0.1);
        assert_relative_eq!(forest.predict_proba(&[1, 0]).unwrap()[1], 0.4);
        assert_relative_eq!(forest.predict_proba(&[1, 1]).unwrap()[1], 0.8);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let forest = ForestBackend::new(2, vec![stump(0, 0.2, 0.8)]);
        assert!(forest.predict_proba(&[1]).unwrap_err().is_inference());
        assert!(forest.predict(&[1, 0, 0]).unwrap_err().is_inference());
    }

    #[test]
    fn validate_checks_structure() {
        assert!(ForestBackend::new(2, vec![]).validate().is_err());
        assert!(ForestBackend::new(0, vec![TreeNode::leaf(0.5, 0.5)])
            .validate()
            .is_err());
        assert!(ForestBackend::new(1, vec![stump(3, 0.2, 0.8)])
            .validate()
            .unwrap_err()
            .contains("feature 3"));
        assert!(ForestBackend::new(1, vec![TreeNode::leaf(0.5, 0.7)])
            .validate()
            .is_err());
        assert!(ForestBackend::new(2, vec![stump(1, 0.2, 0.8)]).validate().is_ok());
    }

    #[test]
    fn tree_json_shape() {
        let json = r#"{"split":{"feature":0,"threshold":0.5,
            "left":{"leaf":{"proba":[0.7,0.3]}},
            "right":{"leaf":{"proba":[0.1,0.9]}}}}"#;
        let tree: TreeNode = serde_json::from_str(json).unwrap();
        let expected = TreeNode::split(0, 0.5, TreeNode::leaf(0.7, 0.3), TreeNode::leaf(0.1, 0.9));
        assert_eq!(tree, expected);
    }
}
