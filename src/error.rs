/// Error types for Domain Replacer
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to read bookmark tree: {0}")]
    Fetch(String),

    #[error("Failed to update bookmark {id}: {reason}")]
    Update { id: String, reason: String },

    #[error("Malformed request: {0}")]
    Request(String),
}

pub type Result<T> = std::result::Result<T, ReplaceError>;
