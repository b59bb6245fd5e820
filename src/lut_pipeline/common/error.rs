use thiserror::Error;

#[derive(Error, Debug)]
pub enum LutError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Insufficient LUT data: expected {expected} entries, found {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Unknown traversal order: '{0}' (expected 'rgb' or 'bgr')")]
    UnknownTraversal(String),

    #[error("Invalid cube side length: {0}")]
    InvalidSide(usize),

    #[error("Invalid maximum input value: {0}")]
    InvalidMaxValue(f64),

    #[error("Invalid probe offset {offset}: must be below {limit}")]
    InvalidProbeOffset { offset: usize, limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LutError>;

/// Reasons a single input line is rejected. These never abort a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 3 values, found {0}")]
    TokenCount(usize),

    #[error("value '{token}' is not numeric")]
    NotNumeric { token: String },

    #[error("value '{token}' is not finite")]
    NonFinite { token: String },
}
