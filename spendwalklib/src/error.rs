//! Единый тип ошибок публичного API.
//!
//! Нехватка средств сюда не относится: это штатный исход прохода
//! (`WalkEvent::Halted`), а не ошибка.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, WalkError>;
