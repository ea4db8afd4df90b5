//! Decode engine: hash in, numbers out.

use crate::decoded::Decoded;
use crate::digits;
use crate::shuffle::reseed;

use super::{DecodeError, Hashids};

impl Hashids {
    /// Decodes a hash produced by [`Hashids::encode`] with the same
    /// configuration.
    ///
    /// The configured prefix is stripped when present. The decoded numbers
    /// are re-encoded and compared against the input, so a hash is only
    /// accepted if it is exactly the one this codec would have produced.
    ///
    /// ## Errors
    /// * `EmptyHash` - no payload could be found
    /// * `AlphabetMismatch` - a symbol is foreign to the alphabet
    /// * `IntegrityMismatch` - the hash is not canonical for this codec
    pub fn decode(&self, hash: &str) -> Result<Decoded, DecodeError> {
        let unprefixed = hash.strip_prefix(self.prefix.as_str()).unwrap_or(hash);
        let symbols: Vec<char> = unprefixed.chars().collect();

        let numbers = self.decode_symbols(&symbols)?;
        if numbers.is_empty() {
            return Err(DecodeError::EmptyHash);
        }

        let reencoded = self.encode_unprefixed(&numbers);
        if reencoded != symbols {
            let expected: String = reencoded.into_iter().collect();
            tracing::debug!(%expected, actual = %unprefixed, "hash failed the re-encode check");

            return Err(DecodeError::IntegrityMismatch {
                expected,
                actual: unprefixed.to_string(),
            });
        }

        Ok(Decoded::new(numbers))
    }

    fn decode_symbols(&self, symbols: &[char]) -> Result<Vec<u64>, DecodeError> {
        let guards = self.alphabet.guards();
        let separators = self.alphabet.separators();

        let chunks: Vec<&[char]> = symbols.split(|symbol| guards.contains(symbol)).collect();

        // With padding the payload sits between the first two guards.
        let mut payload = match chunks.len() {
            2 | 3 => chunks[1],
            _ => chunks[0],
        };
        if payload.is_empty() {
            payload = chunks[0];
        }

        let Some((&lottery, rest)) = payload.split_first() else {
            return Err(DecodeError::EmptyHash);
        };

        let mut alphabet = self.alphabet.symbols().to_vec();
        let mut key = Vec::with_capacity(alphabet.len() + self.salt.len() + 1);

        rest.split(|symbol| separators.contains(symbol))
            .map(|chunk| {
                reseed(&mut alphabet, lottery, &self.salt, &mut key);
                digits::unhash(chunk, &alphabet)
            })
            .collect()
    }
}
