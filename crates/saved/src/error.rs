use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Rejected import text. The collection is left untouched.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Import must be a JSON array of recipes")]
    NotASequence,

    #[error("Import contains an invalid recipe: {0}")]
    InvalidRecipe(serde_json::Error),
}
