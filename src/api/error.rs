use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("no value stored under {0:?}")]
    Missing(String),
}
