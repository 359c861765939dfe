use thiserror::Error;

#[derive(Error, Debug)]
pub enum GsPanelError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// The showcase snapshot itself is unusable (hidden, empty, incomplete).
    #[error("Provider Error: {0}")]
    Provider(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type GsResult<T> = Result<T, GsPanelError>;
