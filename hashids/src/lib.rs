#![deny(missing_docs)]

//! # Hashids
//!
//! A reversible obfuscation codec which turns an ordered sequence of
//! non-negative integers into a short, opaque, printable string and back.
//! The output is driven by a caller-supplied salt and a customizable symbol
//! alphabet, so the same numbers always produce the same string for a given
//! configuration while sequential IDs stop looking sequential.
//!
//! This is obfuscation, not encryption. The salt is not a secret-strength
//! key and the scheme gives no collision guarantees across independently
//! generated IDs.
//!
//! ## Usage Example
//!
//! ```
//! use hashids::Hashids;
//!
//! let hashids = Hashids::builder()
//!     .salt("this is my salt")
//!     .min_length(8)
//!     .build()
//!     .unwrap();
//!
//! let hash = hashids.encode(&[45, 434, 1313, 99]).unwrap();
//! assert_eq!(hash, "7nnhzEsDkiYa");
//!
//! let decoded = hashids.decode(&hash).unwrap();
//! assert_eq!(decoded.as_slice(), &[45, 434, 1313, 99]);
//! ```
//!
//! ## Architecture
//!
//! * **Alphabet**: validates the configured symbols and partitions them into
//!   the working alphabet, the separators and the guards
//! * **Shuffle**: the salt-driven permutation every other step is built on
//! * **Digits**: renders a single number in the (shuffled) alphabet
//! * **Codec**: the encode and decode engines, the latter verifying its own
//!   output by re-encoding
//! * **Input / Hex / Timestamp / Decoded**: adapters around the canonical
//!   `&[u64]` contract

pub mod alphabet;
pub mod codec;
pub mod decoded;
pub mod error;
pub mod hex;
pub mod input;
pub mod timestamp;

mod digits;
mod shuffle;

pub use alphabet::Alphabet;
pub use alphabet::ConfigError;
pub use alphabet::DEFAULT_ALPHABET;
pub use alphabet::DEFAULT_SEPARATORS;
pub use alphabet::LOWERCASE_ALPHABET_WITH_DIGITS;
pub use alphabet::MIN_ALPHABET_LENGTH;

pub use codec::DecodeError;
pub use codec::EncodeError;
pub use codec::Hashids;
pub use codec::HashidsBuilder;
pub use codec::DEFAULT_MIN_LENGTH;

pub use decoded::Decoded;
pub use error::Error;
pub use hex::HexError;
pub use input::Input;
pub use timestamp::TimestampError;
