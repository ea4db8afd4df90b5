//! Top-level error type for the hashids library
//!

use crate::alphabet::ConfigError;
use crate::codec::{DecodeError, EncodeError};
use crate::hex::HexError;
use crate::timestamp::TimestampError;

/// Errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The codec configuration was rejected
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The input could not be encoded
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    /// The hash could not be decoded
    #[error("decoding failed: {0}")]
    Decode(#[from] DecodeError),
    /// Converting decoded numbers back to hex failed
    #[error("{0}")]
    Hex(#[from] HexError),
    /// Converting a decoded number back to a timestamp failed
    #[error("{0}")]
    Timestamp(#[from] TimestampError),
}
