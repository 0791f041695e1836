//! Pipeline error types.

/// Errors that can occur during pipeline processing.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    #[error("failed to serialize page: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
