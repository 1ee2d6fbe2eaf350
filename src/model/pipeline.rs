//! The inference pipeline capability and its serialized implementation

use std::path::Path;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::Result;
use crate::utils::{log_operation_complete, log_operation_start};

use super::encoder::{BinaryEncoder, BinaryEncoderSpec};
use super::gbm::GradientBoostingModel;

/// A pre-trained transformation-plus-model treated as a black box
///
/// `predict` receives rows with the predictor schema and returns one value per
/// row on the model's output scale.
pub trait InferencePipeline: Send + Sync {
    fn predict(&self, rows: &RecordBatch) -> Result<Vec<f64>>;
}

/// On-disk form of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub encoder: BinaryEncoderSpec,
    pub model: GradientBoostingModel,
}

/// Binary encoder followed by a gradient-boosted tree ensemble
#[derive(Debug, Clone)]
pub struct GradientBoostingPipeline {
    encoder: BinaryEncoder,
    model: GradientBoostingModel,
}

impl GradientBoostingPipeline {
    /// Build a pipeline from a parsed artifact, validating it
    pub fn from_artifact(artifact: PipelineArtifact) -> Result<Self> {
        let encoder = BinaryEncoder::from_spec(&artifact.encoder)?;
        artifact.model.validate(encoder.width())?;
        Ok(Self {
            encoder,
            model: artifact.model,
        })
    }

    /// Parse and validate a JSON artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: PipelineArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Number of trees in the ensemble
    #[must_use]
    pub fn num_trees(&self) -> usize {
        self.model.trees.len()
    }
}

impl InferencePipeline for GradientBoostingPipeline {
    fn predict(&self, rows: &RecordBatch) -> Result<Vec<f64>> {
        Ok(self
            .encoder
            .encode(rows)?
            .iter()
            .map(|features| self.model.predict(features))
            .collect())
    }
}

/// Load the pipeline artifact at `path`
///
/// # Errors
/// Fails if the file is missing or unreadable, is not a valid artifact, or
/// references features the encoder does not produce.
pub fn load_pipeline(path: &Path) -> Result<GradientBoostingPipeline> {
    log_operation_start("Loading inference pipeline from", path);
    let start = Instant::now();

    let json = safe_read_to_string(path, "loading the inference pipeline")?;
    let pipeline = GradientBoostingPipeline::from_json(&json)?;

    log_operation_complete("loaded", path, pipeline.num_trees(), Some(start.elapsed()));
    Ok(pipeline)
}
