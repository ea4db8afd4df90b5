//! Renders a single number as a sequence of symbols of a (shuffled)
//! alphabet, most significant digit first, and back again.
//!
//! This is a plain positional numeral system whose base is the alphabet
//! length and whose digits are the alphabet symbols in their current order.
//! `unhash` only inverts `hash` when handed the exact same ordering.
//!
//! `unhash` wraps on overflow instead of failing. A chunk too long for 64
//! bits can never have been produced by `hash`, and the decoder's re-encode
//! check rejects it.

use crate::codec::DecodeError;

/// Renders `number` using `alphabet` as the digit set. Always returns at
/// least one symbol; zero renders as `alphabet[0]`.
///
/// The caller guarantees a non-empty alphabet, which holds for every
/// alphabet produced by [`crate::Alphabet::new`].
pub fn hash(mut number: u64, alphabet: &[char]) -> Vec<char> {
    let base = alphabet.len() as u64;
    let mut digits = Vec::new();

    loop {
        // SAFETY: the remainder is strictly less than `alphabet.len()`.
        digits.push(alphabet[(number % base) as usize]);
        number /= base;

        if number == 0 {
            break;
        }
    }

    digits.reverse();
    digits
}

/// Reads `symbols` back into a number using `alphabet` as the digit set.
///
/// ## Errors
/// * `AlphabetMismatch` - a symbol is not part of `alphabet`
pub fn unhash(symbols: &[char], alphabet: &[char]) -> Result<u64, DecodeError> {
    let base = alphabet.len() as u64;

    symbols.iter().try_fold(0u64, |number, &symbol| {
        let position = alphabet
            .iter()
            .position(|&s| s == symbol)
            .ok_or(DecodeError::AlphabetMismatch(symbol))?;

        Ok(number.wrapping_mul(base).wrapping_add(position as u64))
    })
}
