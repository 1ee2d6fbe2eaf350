//! Prediction record types and the inference pipeline

pub mod encoder;
pub mod gbm;
pub mod pipeline;
pub mod record;

pub use encoder::{BinaryEncoder, BinaryEncoderSpec, EncodedColumn, HandleUnknown};
pub use gbm::{GradientBoostingModel, RegressionTree, TreeNode};
pub use pipeline::{GradientBoostingPipeline, InferencePipeline, PipelineArtifact, load_pipeline};
pub use record::{
    CompanySize, EmploymentType, ExperienceLevel, PredictionRecord, WorkSetting, WorkYear,
};
