use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VeridionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment file error in {path}: {message}")]
    EnvFileError { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, VeridionError>;
