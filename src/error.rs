use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("key '{0}' not found")]
    NotFound(String),

    #[error("malformed value at '{0}': missing or non-string 'data' field")]
    Malformed(String),

    #[error("failed to decode value at '{path}': {detail}")]
    Decode { path: String, detail: String },

    #[error("failed to {action} key '{path}' from {store}: {detail}")]
    Transport {
        action: &'static str,
        path: String,
        store: String,
        detail: String,
    },

    #[error("maximum recursion depth ({max}) exceeded at '{path}'")]
    DepthExceeded { path: String, max: usize },

    #[error("can't find keys to delete under '{0}'")]
    EmptyResult(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
