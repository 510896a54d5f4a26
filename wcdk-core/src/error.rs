use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Chain metadata
    #[error("unknown chain id: {0}")]
    UnknownChain(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    // Pass-through for transport and backend implementations
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an implementor-defined failure without remapping it.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
