//! # Salted Shuffle
//!
//! The deterministic, salt-driven permutation used to reorder the alphabet
//! and the separators. This is a Fisher–Yates walk whose swap targets come
//! from the salt rather than from a random source, so it must match
//! bit-for-bit: any deviation changes every previously issued hash.
//!
//! For each index `i` from the back down to `1`:
//!
//! ```text
//! p += salt[v]
//! j  = (salt[v] + v + p) mod i
//! swap(seq[i], seq[j])
//! v  = (v + 1) mod len(salt)
//! ```
//!
//! Salt symbols participate through their Unicode scalar values and the
//! accumulator `p` carries over between iterations.

/// Permutes `symbols` in place using `salt` as the key. An empty salt
/// leaves the sequence untouched.
///
/// The key and the sequence are separate borrows, so a caller wanting to
/// shuffle a sequence with itself as the key has to copy it first.
pub fn shuffle(symbols: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut accumulator: u64 = 0;
    let mut salt_index = 0;

    for i in (1..symbols.len()).rev() {
        let code = u64::from(salt[salt_index]);
        accumulator += code;

        // Note: the modulus is the current index, not the sequence length.
        let j = (code + salt_index as u64 + accumulator) % i as u64;
        symbols.swap(i, j as usize);

        salt_index = (salt_index + 1) % salt.len();
    }
}

/// Re-shuffles a per-number working alphabet ahead of hashing (or
/// unhashing) one number.
///
/// The round key is `[lottery] + salt + alphabet`, truncated to the length
/// of the alphabet. `key` is a scratch buffer reused across rounds.
pub fn reseed(alphabet: &mut [char], lottery: char, salt: &[char], key: &mut Vec<char>) {
    key.clear();
    key.push(lottery);
    key.extend_from_slice(salt);
    key.extend_from_slice(alphabet);
    key.truncate(alphabet.len());

    shuffle(alphabet, key);
}
