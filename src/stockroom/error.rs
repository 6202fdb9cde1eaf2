use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Catalog file not found: {}", .0.display())]
    CatalogMissing(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid product id: {0}")]
    InvalidHandle(String),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
