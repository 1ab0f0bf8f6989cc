use autoface_classifier::ClassifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("Failed to serialize interface model: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
