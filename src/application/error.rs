use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
