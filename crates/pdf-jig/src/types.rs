use thiserror::Error;

#[derive(Error, Debug)]
pub enum JigError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid page geometry: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, JigError>;
