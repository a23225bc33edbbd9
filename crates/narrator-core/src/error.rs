//! Error types for the Narrator core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Upstream TTS provider error: {0}")]
    UpstreamError(String),

    #[error("Upstream stream produced no audio")]
    EmptyAudio,

    #[error("Audio payload decoding error: {0}")]
    DecodeError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::DecodeError(e.to_string())
    }
}
