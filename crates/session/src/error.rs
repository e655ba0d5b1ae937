use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
