//! Error types for FlickUAC
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlickError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Resource error: {0}")]
    Resource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(windows)]
    #[error("Windows error: {0}")]
    Windows(#[from] windows::core::Error),
}

pub type Result<T> = std::result::Result<T, FlickError>;
