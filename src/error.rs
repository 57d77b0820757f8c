use thiserror::Error;

/// Errors raised by the segmentation pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The source image is not a usable 2-D grayscale grid
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
