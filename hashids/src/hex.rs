//! Hexadecimal adapter.
//!
//! Every hex digit becomes its own number, offset by `0x10` so that each
//! value lies in `16..=31`. The offset keeps leading zero digits from
//! collapsing. Decoding reverses the mapping and always yields lowercase
//! digits.

/// Added to every hex digit before encoding.
pub const HEX_OFFSET: u64 = 0x10;

/// Errors from converting between hex strings and numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The hex string has no digits
    #[error("hex string is empty")]
    Empty,

    /// A symbol is not a hex digit
    #[error("{0:?} is not a hexadecimal digit")]
    InvalidDigit(char),

    /// A decoded value does not map back onto a hex digit
    #[error("decoded value {0} is outside of the hex digit range 16..=31")]
    ValueOutOfRange(u64),
}

/// Maps each hex digit of `hex` (either case) to `digit + 0x10`.
pub fn hex_to_numbers(hex: &str) -> Result<Vec<u64>, HexError> {
    if hex.is_empty() {
        return Err(HexError::Empty);
    }

    hex.chars()
        .map(|symbol| {
            symbol
                .to_digit(16)
                .map(|digit| u64::from(digit) + HEX_OFFSET)
                .ok_or(HexError::InvalidDigit(symbol))
        })
        .collect()
}

/// Inverse of [`hex_to_numbers`], producing lowercase digits.
pub fn numbers_to_hex(numbers: &[u64]) -> Result<String, HexError> {
    if numbers.is_empty() {
        return Err(HexError::Empty);
    }

    numbers
        .iter()
        .map(|&number| {
            number
                .checked_sub(HEX_OFFSET)
                .and_then(|digit| u32::try_from(digit).ok())
                .and_then(|digit| char::from_digit(digit, 16))
                .ok_or(HexError::ValueOutOfRange(number))
        })
        .collect()
}
