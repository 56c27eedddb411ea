//! Error types for the lp-app service layer.

use std::path::PathBuf;

/// Application error wrapping the component crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file type: {name} (expected .lp or .txt)")]
    UnsupportedFile { name: String },

    #[error("{name} is not valid UTF-8 text")]
    Decode { name: String },

    #[error("Matrix file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Matrix(#[from] lp_matrix::MatrixError),

    #[error(transparent)]
    Solve(#[from] lp_client::SolveError),

    #[error(transparent)]
    Config(#[from] lp_client::ConfigError),
}

/// Result type for lp-app operations.
pub type AppResult<T> = Result<T, AppError>;
