//! The result of a successful decode.

use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::hex::{self, HexError};
use crate::timestamp::{self, TimestampError};

/// The non-empty sequence of numbers recovered from a hash, in their
/// original order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Decoded(Vec<u64>);

impl Decoded {
    pub(crate) fn new(numbers: Vec<u64>) -> Self {
        Self(numbers)
    }

    /// The decoded numbers.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// How many numbers were decoded. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first decoded number.
    pub fn first(&self) -> Option<u64> {
        self.0.first().copied()
    }

    /// Iterates over the decoded numbers.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    /// Consumes the result, returning the numbers.
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// Applies `f` to every number along with its position.
    pub fn map(self, mut f: impl FnMut(u64, usize) -> u64) -> Self {
        Self(
            self.0
                .into_iter()
                .enumerate()
                .map(|(index, number)| f(number, index))
                .collect(),
        )
    }

    /// Reads the numbers back as the hex string they were produced from.
    pub fn to_hex(&self) -> Result<String, HexError> {
        hex::numbers_to_hex(&self.0)
    }

    /// Reads the single number back as the point in time it was produced
    /// from.
    pub fn to_time(&self) -> Result<OffsetDateTime, TimestampError> {
        match self.0.as_slice() {
            [nanos] => timestamp::from_nanos(*nanos),
            numbers => Err(TimestampError::NotSingleValue(numbers.len())),
        }
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut numbers = self.0.iter();
        if let Some(first) = numbers.next() {
            write!(f, "{first}")?;
        }
        for number in numbers {
            write!(f, ",{number}")?;
        }
        Ok(())
    }
}

impl AsRef<[u64]> for Decoded {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl From<Decoded> for Vec<u64> {
    fn from(decoded: Decoded) -> Self {
        decoded.0
    }
}

impl<'a> IntoIterator for &'a Decoded {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
