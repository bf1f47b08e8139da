use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid limits: {0}")]
    InvalidLimits(String),

    #[error("Invalid preference: {0}")]
    InvalidPreference(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog has no items")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, OrderError>;
