use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("No record at position {0}")]
    PositionNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
