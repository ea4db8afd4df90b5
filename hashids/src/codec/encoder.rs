//! Encode engine: numbers in, hash out.

use crate::digits;
use crate::shuffle::{reseed, shuffle};

use super::{EncodeError, Hashids};

impl Hashids {
    /// Encodes a non-empty sequence of numbers into a hash of at least
    /// [`Hashids::min_length`] symbols, prefixed with the configured prefix.
    ///
    /// ## Format
    /// 1. The lottery symbol, `alphabet[checksum mod len]`
    /// 2. Each number rendered in an alphabet re-shuffled with the key
    ///    `[lottery] + salt + alphabet`, consecutive numbers joined by one
    ///    separator
    /// 3. While too short: a leading guard, a trailing guard, then halves of
    ///    a self-shuffled alphabet wrapped around the hash and trimmed to
    ///    exactly the minimum length
    ///
    /// ## Errors
    /// * `EmptyInput` - `numbers` is empty
    pub fn encode(&self, numbers: &[u64]) -> Result<String, EncodeError> {
        if numbers.is_empty() {
            return Err(EncodeError::EmptyInput);
        }

        let hash = self.encode_unprefixed(numbers);

        let mut result = String::with_capacity(self.prefix.len() + hash.len() * 4);
        result.push_str(&self.prefix);
        result.extend(hash);
        Ok(result)
    }

    /// Encodes `numbers` without the prefix.
    ///
    /// Callers must pass a non-empty slice.
    pub(super) fn encode_unprefixed(&self, numbers: &[u64]) -> Vec<char> {
        // Fresh working copy of the master alphabet for this call.
        let mut alphabet = self.alphabet.symbols().to_vec();
        let separators = self.alphabet.separators();

        let checksum = numbers_checksum(numbers);

        // SAFETY: the alphabet is never empty (see `Alphabet`), so the index
        // is always in bounds.
        let lottery = alphabet[(checksum % alphabet.len() as u64) as usize];

        let mut hash = Vec::with_capacity(self.min_length.max(numbers.len() * 4));
        hash.push(lottery);

        let mut key = Vec::with_capacity(alphabet.len() + self.salt.len() + 1);

        for (index, &number) in numbers.iter().enumerate() {
            reseed(&mut alphabet, lottery, &self.salt, &mut key);

            let chunk = digits::hash(number, &alphabet);
            hash.extend_from_slice(&chunk);

            if index + 1 < numbers.len() {
                // SAFETY: `digits::hash` always yields at least one symbol.
                let leading = u64::from(chunk[0]);
                // Only U+0000 at index 0 gives a zero divisor.
                let remainder = number
                    .checked_rem(leading + index as u64)
                    .unwrap_or(number);
                hash.push(separators[(remainder % separators.len() as u64) as usize]);
            }
        }

        self.pad(hash, alphabet, checksum)
    }

    /// Brings `hash` up to the minimum length. `alphabet` is the working
    /// alphabet as left behind by the last number.
    fn pad(&self, mut hash: Vec<char>, mut alphabet: Vec<char>, checksum: u64) -> Vec<char> {
        let guards = self.alphabet.guards();
        let guard_at = |symbol: char| {
            // SAFETY: guards are never empty (see `Alphabet`).
            guards[((checksum + u64::from(symbol)) % guards.len() as u64) as usize]
        };

        if hash.len() < self.min_length {
            let guard = guard_at(hash[0]);
            hash.insert(0, guard);

            if hash.len() < self.min_length {
                // The hash holds at least the leading guard, the lottery and
                // one digit here.
                let guard = guard_at(hash[2]);
                hash.push(guard);
            }
        }

        let half = alphabet.len() / 2;
        while hash.len() < self.min_length {
            let key = alphabet.clone();
            shuffle(&mut alphabet, &key);

            let mut padded = Vec::with_capacity(hash.len() + alphabet.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.extend_from_slice(&hash);
            padded.extend_from_slice(&alphabet[..half]);

            let excess = padded.len().saturating_sub(self.min_length);
            if excess > 0 {
                let start = excess / 2;
                padded.truncate(start + self.min_length);
                padded.drain(..start);
            }

            hash = padded;
        }

        hash
    }
}

/// A cheap positional checksum of the input, used only to pick the lottery
/// symbol and the guards.
fn numbers_checksum(numbers: &[u64]) -> u64 {
    numbers
        .iter()
        .enumerate()
        .fold(0u64, |sum, (index, &number)| {
            sum.wrapping_add(number % (index as u64 + 100))
        })
}
