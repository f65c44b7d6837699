use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read process memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Remote call to `{function}` failed: {message}")]
    RemoteCallFailed { function: String, message: String },

    #[error("Failed to evaluate expression `{expr}`: {message}")]
    EvalFailed { expr: String, message: String },

    #[error("Invalid capture file: {0}")]
    InvalidCapture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
