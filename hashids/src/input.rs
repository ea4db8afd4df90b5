//! The shapes of input the codec accepts, all normalized into a sequence of
//! non-negative numbers before encoding.

use std::borrow::Cow;

use time::OffsetDateTime;

use crate::codec::EncodeError;
use crate::{hex, timestamp};

/// Input accepted by [`crate::Hashids::encode_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// A single number
    Scalar(u64),
    /// A sequence of numbers, borrowed or owned
    Sequence(Cow<'a, [u64]>),
    /// A sequence of signed numbers; every value must be non-negative
    Signed(Vec<i64>),
    /// A hexadecimal string, one number per hex digit
    Hex(&'a str),
    /// A point in time, as nanoseconds since the Unix epoch
    Timestamp(OffsetDateTime),
}

impl<'a> Input<'a> {
    /// Normalizes the input into the numbers that get encoded.
    ///
    /// ## Errors
    /// * `NegativeNumber` - a signed value is below zero
    /// * `Hex` - the hex string is empty or contains a non-hex symbol
    /// * `Timestamp` - the time lies before the epoch or too far after it
    pub fn into_numbers(self) -> Result<Cow<'a, [u64]>, EncodeError> {
        match self {
            Input::Scalar(number) => Ok(Cow::Owned(vec![number])),
            Input::Sequence(numbers) => Ok(numbers),
            Input::Signed(numbers) => numbers
                .into_iter()
                .map(|number| u64::try_from(number).map_err(|_| EncodeError::NegativeNumber(number)))
                .collect::<Result<Vec<_>, _>>()
                .map(Cow::Owned),
            Input::Hex(text) => Ok(Cow::Owned(hex::hex_to_numbers(text)?)),
            Input::Timestamp(time) => Ok(Cow::Owned(vec![timestamp::to_nanos(time)?])),
        }
    }
}

impl From<u64> for Input<'_> {
    fn from(number: u64) -> Self {
        Input::Scalar(number)
    }
}

impl From<i64> for Input<'_> {
    fn from(number: i64) -> Self {
        Input::Signed(vec![number])
    }
}

impl From<Vec<u64>> for Input<'_> {
    fn from(numbers: Vec<u64>) -> Self {
        Input::Sequence(Cow::Owned(numbers))
    }
}

impl<'a> From<&'a [u64]> for Input<'a> {
    fn from(numbers: &'a [u64]) -> Self {
        Input::Sequence(Cow::Borrowed(numbers))
    }
}

impl<const N: usize> From<[u64; N]> for Input<'_> {
    fn from(numbers: [u64; N]) -> Self {
        Input::Sequence(Cow::Owned(numbers.to_vec()))
    }
}

impl From<Vec<i64>> for Input<'_> {
    fn from(numbers: Vec<i64>) -> Self {
        Input::Signed(numbers)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(hex: &'a str) -> Self {
        Input::Hex(hex)
    }
}

impl From<OffsetDateTime> for Input<'_> {
    fn from(time: OffsetDateTime) -> Self {
        Input::Timestamp(time)
    }
}
