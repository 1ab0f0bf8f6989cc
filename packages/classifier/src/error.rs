use crate::options::TargetKind;
use thiserror::Error;

/// Configuration errors that abort a single synthesis request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Type '{0}' could not be resolved")]
    UnresolvedType(String),

    #[error("Unit type '{0}' could not be resolved")]
    UnresolvedUnitType(String),

    #[error("A target interface is required in {0} mode")]
    MissingTarget(TargetKind),

    #[error("{mode} mode does not support {option}")]
    UnsupportedOption { mode: TargetKind, option: String },

    #[error("Cannot extract an interface from {kind} '{type_name}'")]
    UnsupportedTypeKind { type_name: String, kind: String },

    #[error("Type '{0}' has no declarable accessibility")]
    UnsupportedAccessibility(String),

    #[error("No public {mode} members of '{type_name}' could be projected")]
    NoMatchingMembers { type_name: String, mode: TargetKind },

    #[error("Classification of '{0}' was cancelled")]
    Cancelled(String),
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
