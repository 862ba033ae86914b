use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    // Import failures carry a user-facing message; no prefix so the CLI
    // can print them verbatim.
    #[error("{0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
