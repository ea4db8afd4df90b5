//! # Alphabet Preparation
//!
//! Validates a raw symbol set and carves it into three disjoint working
//! sets:
//!
//! * **symbols**: the working alphabet numbers are rendered in
//! * **separators**: delimit the chunks of consecutive numbers
//! * **guards**: mark the padded boundary of a short hash
//!
//! The partition is computed once per configuration and never changes
//! afterwards. Separators and guards are taken out of the raw alphabet, never
//! duplicated, with one exception: separator candidates dropped while
//! shrinking the separator set are discarded rather than handed back to the
//! working alphabet. Existing hashes depend on that asymmetry.

use crate::shuffle::shuffle;

/// The default 62 symbol alphabet.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Lowercase letters and digits, for case-insensitive contexts.
pub const LOWERCASE_ALPHABET_WITH_DIGITS: &str = "abcdefghijklmnopqrstuvwxyz1234567890";

/// The default separator candidates. Only those also present in the
/// alphabet are used.
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// Minimum number of unique symbols an alphabet must contain.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// The alphabet to separator ratio is kept at or below 3.5, i.e. 7 / 2.
/// Integer arithmetic keeps the comparison exact.
#[rustfmt::skip]
const SEPARATOR_RATIO_NUMERATOR: usize   = 7;
#[rustfmt::skip]
const SEPARATOR_RATIO_DENOMINATOR: usize = 2;

/// One guard for every (started) 12 alphabet symbols.
const GUARD_RATIO: usize = 12;

/// Errors raised while preparing an alphabet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The alphabet has fewer symbols than [`MIN_ALPHABET_LENGTH`].
    #[error("alphabet must contain at least {min} unique symbols, got {actual}")]
    AlphabetTooShort {
        /// The minimum number of symbols required
        min: usize,
        /// The number of symbols in the supplied alphabet
        actual: usize,
    },

    /// Spaces are reserved and cannot be alphabet symbols.
    #[error("alphabet must not contain spaces")]
    AlphabetContainsSpace,

    /// Every alphabet symbol must be unique.
    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    /// Partitioning left the working alphabet, the separators or the guards
    /// without any symbols. Only reachable with custom separator candidates.
    #[error("separator candidates consumed the entire alphabet")]
    AlphabetExhausted,
}

/// A validated alphabet, partitioned into working symbols, separators and
/// guards.
///
/// # Invariants
/// - `symbols`, `separators` and `guards` are pairwise disjoint
/// - none of the three is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl Alphabet {
    /// Validates `alphabet` and partitions it using the separator
    /// candidates in `separators`, shuffling with `salt`.
    ///
    /// ## Errors
    /// - [`ConfigError::AlphabetContainsSpace`]
    /// - [`ConfigError::DuplicateSymbol`]
    /// - [`ConfigError::AlphabetTooShort`]
    /// - [`ConfigError::AlphabetExhausted`]
    pub fn new(alphabet: &str, separators: &str, salt: &[char]) -> Result<Self, ConfigError> {
        let mut symbols: Vec<char> = Vec::with_capacity(alphabet.len());
        for symbol in alphabet.chars() {
            if symbol == ' ' {
                return Err(ConfigError::AlphabetContainsSpace);
            }
            if symbols.contains(&symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
            symbols.push(symbol);
        }

        if symbols.len() < MIN_ALPHABET_LENGTH {
            return Err(ConfigError::AlphabetTooShort {
                min: MIN_ALPHABET_LENGTH,
                actual: symbols.len(),
            });
        }

        // Keep only the separator candidates that are alphabet symbols, and
        // take each of them out of the alphabet. The separators keep the
        // order of the candidate list.
        let mut seps: Vec<char> = Vec::new();
        for candidate in separators.chars() {
            if seps.contains(&candidate) {
                continue;
            }
            if let Some(position) = symbols.iter().position(|&s| s == candidate) {
                symbols.remove(position);
                seps.push(candidate);
            }
        }

        shuffle(&mut seps, salt);

        // Rebalance when there are no separators, or when
        // `symbols / seps > 3.5` (i.e. `2 * symbols > 7 * seps`).
        if seps.is_empty()
            || symbols.len() * SEPARATOR_RATIO_DENOMINATOR > seps.len() * SEPARATOR_RATIO_NUMERATOR
        {
            // ceil(symbols / 3.5), but never fewer than two separators.
            let target = (symbols.len() * SEPARATOR_RATIO_DENOMINATOR)
                .div_ceil(SEPARATOR_RATIO_NUMERATOR)
                .max(2);

            if target > seps.len() {
                let diff = (target - seps.len()).min(symbols.len());
                seps.extend(symbols.drain(..diff));
            } else {
                // Excess separators are dropped, not returned.
                seps.truncate(target);
            }
        }

        shuffle(&mut symbols, salt);

        let guard_count = symbols.len().div_ceil(GUARD_RATIO);
        let guards: Vec<char> = if symbols.len() < 3 {
            seps.drain(..guard_count.min(seps.len())).collect()
        } else {
            symbols.drain(..guard_count).collect()
        };

        if symbols.is_empty() || seps.is_empty() || guards.is_empty() {
            return Err(ConfigError::AlphabetExhausted);
        }

        tracing::debug!(
            symbols = symbols.len(),
            separators = seps.len(),
            guards = guards.len(),
            "prepared alphabet"
        );

        Ok(Self { symbols, separators: seps, guards })
    }

    /// The working alphabet numbers are rendered in.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbols used to delimit consecutive numbers.
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// The symbols used to mark padding boundaries.
    pub fn guards(&self) -> &[char] {
        &self.guards
    }
}
