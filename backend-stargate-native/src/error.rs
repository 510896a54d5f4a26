use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP GET failed: {0}")]
    HttpGet(String),
    #[error("HTTP POST failed: {0}")]
    HttpPost(String),
    #[error("invalid txhash in broadcast response: {0}")]
    TxHash(#[from] hex::FromHexError),
    #[error("invalid block height in status response: {0}")]
    InvalidHeight(#[from] std::num::ParseIntError),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] wcdk_core::Error),
    #[error(transparent)]
    Signer(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for wcdk_core::Error {
    fn from(e: Error) -> Self {
        wcdk_core::Error::Transport(Box::new(e))
    }
}
