//! Gradient-boosted regression trees

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// One node of a regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go to `left` when `features[feature] <= threshold`, otherwise `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node
    Leaf { value: f64 },
}

/// Regression tree stored as a node array with the root at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Check that the tree is non-empty, that every split reads a feature
    /// below `n_features`, and that children always come after their parent.
    ///
    /// The last condition rules out cycles, so `predict` always terminates.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(DashboardError::pipeline("Tree has no nodes"));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = *node
            {
                if feature >= n_features {
                    return Err(DashboardError::pipeline(format!(
                        "Node {idx} splits on feature {feature}, but only {n_features} features exist"
                    )));
                }
                for child in [left, right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(DashboardError::pipeline(format!(
                            "Node {idx} has invalid child index {child}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk the tree for one feature vector
    ///
    /// Requires a tree that passed `validate`.
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Additive tree ensemble: `init + learning_rate * sum(tree(x))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    pub init: f64,
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
}

impl GradientBoostingModel {
    /// Validate every tree against the encoded feature width
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if !self.learning_rate.is_finite() || !self.init.is_finite() {
            return Err(DashboardError::pipeline(
                "Model init and learning rate must be finite",
            ));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|e| DashboardError::pipeline(format!("Tree {idx}: {e}")))?;
        }
        Ok(())
    }

    /// Predict one feature vector
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        let boost: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        self.init + self.learning_rate * boost
    }
}
