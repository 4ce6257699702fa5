use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JstructError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, JstructError>;
