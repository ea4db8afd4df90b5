//! # Codec
//!
//! The configured codec and its encode/decode engines.
//!
//! A [`Hashids`] value holds only immutable derived state: the salt, the
//! partitioned [`Alphabet`], the minimum length and the optional literal
//! prefix. Every encode or decode call clones the master alphabet into a
//! local working copy before shuffling it, so a single instance can be
//! shared freely between threads.
//!
//! ## Format
//!
//! ```text
//! [prefix][guard?][lottery][chunk (sep chunk)*][guard?][padding]
//! ```
//!
//! * **lottery**: one alphabet symbol picked from a checksum of the input,
//!   seeding every per-number shuffle
//! * **chunk**: one number rendered in its own freshly shuffled alphabet
//! * **guard / padding**: added only while the hash is shorter than the
//!   minimum length; the prefix does not count towards that length

use std::borrow::Cow;

use crate::alphabet::{Alphabet, ConfigError, DEFAULT_ALPHABET, DEFAULT_SEPARATORS};
use crate::hex::HexError;
use crate::input::Input;
use crate::timestamp::TimestampError;

mod decoder;
mod encoder;

/// Minimum hash length used when none is configured.
pub const DEFAULT_MIN_LENGTH: usize = 16;

/// Errors that can occur while encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// There were no numbers to encode
    #[error("cannot encode an empty sequence of numbers")]
    EmptyInput,

    /// Only non-negative numbers can be encoded
    #[error("negative numbers like {0} are not allowed")]
    NegativeNumber(i64),

    /// The hex input could not be converted into numbers
    #[error("invalid hex input: {0}")]
    Hex(#[from] HexError),

    /// The timestamp could not be converted into a number
    #[error("invalid timestamp input: {0}")]
    Timestamp(#[from] TimestampError),
}

/// Errors that can occur while decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No lottery symbol could be found, so there is nothing to decode
    #[error("the hash contains no payload")]
    EmptyHash,

    /// A symbol is not part of the alphabet expected at its position
    #[error("alphabet that was used for hashing was different: unexpected symbol {0:?}")]
    AlphabetMismatch(char),

    /// Re-encoding the decoded numbers did not reproduce the input
    #[error("mismatch between encoded and decoded values: {expected} -> {actual}")]
    IntegrityMismatch {
        /// The hash produced by re-encoding the decoded numbers
        expected: String,
        /// The hash that was given for decoding (prefix removed)
        actual: String,
    },
}

/// A configured, reversible integer obfuscation codec.
///
/// Build one with [`Hashids::builder`]. The configuration must be identical
/// (alphabet, separators, salt, minimum length, prefix) on both the
/// encoding and the decoding side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashids {
    salt: Vec<char>,
    alphabet: Alphabet,
    min_length: usize,
    prefix: String,
}

impl Hashids {
    /// Returns a builder with the default alphabet, the default separators,
    /// an empty salt and [`DEFAULT_MIN_LENGTH`].
    pub fn builder() -> HashidsBuilder {
        HashidsBuilder::default()
    }

    /// Shorthand for a default configuration with the given salt.
    pub fn with_salt(salt: &str) -> Result<Self, ConfigError> {
        Self::builder().salt(salt).build()
    }

    /// The partitioned alphabet this codec renders with.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The minimum length of a hash, not counting the prefix.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The literal prefix prepended to every hash.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sets the literal prefix. The alphabet is not re-derived.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Removes the literal prefix.
    pub fn clear_prefix(&mut self) -> &mut Self {
        self.prefix.clear();
        self
    }

    /// Encodes any supported [`Input`] shape through the canonical
    /// [`Hashids::encode`] entry point.
    pub fn encode_input<'a>(&self, input: impl Into<Input<'a>>) -> Result<String, EncodeError> {
        let numbers: Cow<'a, [u64]> = input.into().into_numbers()?;
        self.encode(&numbers)
    }

    /// Encodes a hexadecimal string, one number per hex digit.
    pub fn encode_hex(&self, hex: &str) -> Result<String, EncodeError> {
        self.encode_input(Input::Hex(hex))
    }

    /// Encodes a point in time as nanoseconds since the Unix epoch.
    pub fn encode_time(&self, time: time::OffsetDateTime) -> Result<String, EncodeError> {
        self.encode_input(Input::Timestamp(time))
    }
}

/// Builder for [`Hashids`].
#[derive(Debug, Clone)]
pub struct HashidsBuilder {
    salt: String,
    alphabet: String,
    separators: String,
    min_length: usize,
    prefix: String,
}

impl Default for HashidsBuilder {
    fn default() -> Self {
        Self {
            salt: String::new(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            separators: DEFAULT_SEPARATORS.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            prefix: String::new(),
        }
    }
}

impl HashidsBuilder {
    /// Sets the salt. An empty salt disables shuffling.
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Sets the alphabet. An empty string selects [`DEFAULT_ALPHABET`].
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Sets the separator candidates.
    pub fn separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Sets the minimum hash length (prefix excluded).
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the literal prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Validates the configuration and prepares the alphabet.
    pub fn build(self) -> Result<Hashids, ConfigError> {
        let salt: Vec<char> = self.salt.chars().collect();
        let raw_alphabet = if self.alphabet.is_empty() {
            DEFAULT_ALPHABET
        } else {
            self.alphabet.as_str()
        };

        let alphabet = Alphabet::new(raw_alphabet, &self.separators, &salt)?;

        Ok(Hashids {
            salt,
            alphabet,
            min_length: self.min_length,
            prefix: self.prefix,
        })
    }
}
