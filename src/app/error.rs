use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("failed to start UI: {0}")]
    Ui(String),
}
