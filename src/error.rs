use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
