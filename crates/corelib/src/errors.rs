use thiserror::Error;

/// Rejections raised by put-operations before any byte reaches the sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("range [{off}, {off}+{len}) out of bounds for length {size}")]
    IndexOutOfRange { off: usize, len: usize, size: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hash '{0}' is not supported")]
    UnknownHash(String),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
