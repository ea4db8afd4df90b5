//! Top-level error type for the hashids command line tool
//!

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be loaded or was invalid
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// The codec rejected the input or the hash
    #[error(transparent)]
    Hashids(#[from] hashids::Error),
    /// The given time was not a valid RFC 3339 timestamp
    #[error("could not parse time {1:?} as RFC 3339: {0}")]
    ParseTime(#[source] time::error::Parse, String),
    /// A decoded time could not be rendered
    #[error("could not format decoded time: {0}")]
    FormatTime(#[from] time::error::Format),
    /// The result could not be serialized as JSON
    #[error("could not serialize the result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<hashids::EncodeError> for Error {
    fn from(err: hashids::EncodeError) -> Self {
        Error::Hashids(err.into())
    }
}

impl From<hashids::DecodeError> for Error {
    fn from(err: hashids::DecodeError) -> Self {
        Error::Hashids(err.into())
    }
}

impl From<hashids::HexError> for Error {
    fn from(err: hashids::HexError) -> Self {
        Error::Hashids(err.into())
    }
}

impl From<hashids::TimestampError> for Error {
    fn from(err: hashids::TimestampError) -> Self {
        Error::Hashids(err.into())
    }
}
