//! Error types for Samvad

use thiserror::Error;

use crate::types::Collection;

pub type Result<T> = std::result::Result<T, SamvadError>;

#[derive(Error, Debug)]
pub enum SamvadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed data error: {0}")]
    Seed(#[from] SeedError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No {collection} entry with id {id}")]
    NotFound { collection: Collection, id: u64 },
}

impl SamvadError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SamvadError::InvalidInput(_) => 3,
            SamvadError::Config(_) => 1,
            SamvadError::Seed(_) => 1,
            SamvadError::NotFound { .. } => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: String, id: u64 },

    #[error("Empty text on {collection} entry {id}")]
    EmptyText { collection: String, id: u64 },
}
