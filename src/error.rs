//! Error types for the cbb-nil CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NilError>;

#[derive(Error, Debug)]
pub enum NilError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid class year: {class}")]
    InvalidClassYear { class: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Coach not found: {name}")]
    CoachNotFound { name: String },

    #[error("Input file has no usable rows: {path}")]
    EmptyInput { path: String },

    #[error("Missing column `{column}` in {path}")]
    MissingColumn { column: String, path: String },
}

impl From<anyhow::Error> for NilError {
    fn from(err: anyhow::Error) -> Self {
        NilError::Database {
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for NilError {
    fn from(err: rusqlite::Error) -> Self {
        NilError::Database {
            message: err.to_string(),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for NilError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        NilError::Database {
            message: err.to_string(),
        }
    }
}
