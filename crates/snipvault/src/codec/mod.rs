//! Reversible obfuscation of chronological digit identifiers.
//!
//! Raw snippet identifiers are sortable digit strings, so exposing them
//! directly lets clients enumerate the store. The codec substitutes each digit
//! with one of five letters assigned to it, chosen at random per call, which
//! makes public identifiers non-guessable while remaining decodable without
//! any server-side state. The substitution table lives in `alphabet`.

mod alphabet;

pub(crate) use alphabet::{LETTERS_PER_DIGIT, LOOKUP, NO_VALUE};

use crate::{Error, RandSource, Result};

/// Encodes a digit string into a randomized letter string.
///
/// Each digit is replaced by one of its five candidate letters, picked with
/// `rng`. Repeated calls with the same input are expected to produce different
/// outputs; every output decodes back to `digits` via [`decode_digits`].
///
/// # Errors
///
/// Fails fast on the first byte that is not an ASCII digit.
///
/// # Example
///
/// ```
/// use snipvault::{decode_digits, encode_digits, ThreadRandom};
///
/// let public = encode_digits("20210205", &ThreadRandom)?;
/// assert_eq!(decode_digits(&public)?, "20210205");
/// # Ok::<(), snipvault::Error>(())
/// ```
pub fn encode_digits<R: RandSource>(digits: &str, rng: &R) -> Result<String> {
    for (index, byte) in digits.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidDigit { byte, index });
        }
    }
    Ok(encode_digits_unchecked(digits.as_bytes(), rng))
}

/// Infallible encoding for inputs already known to be ASCII digits.
pub(crate) fn encode_digits_unchecked<R: RandSource>(digits: &[u8], rng: &R) -> String {
    let mut out = String::with_capacity(digits.len());
    for &byte in digits {
        debug_assert!(byte.is_ascii_digit());
        let candidates = &alphabet::ENCODE[(byte - b'0') as usize];
        out.push(candidates[rng.index(LETTERS_PER_DIGIT)] as char);
    }
    out
}

/// Decodes a letter string back into the digit string it was encoded from.
///
/// Single pass, no backtracking: each byte is a table lookup. The mapping is
/// many-to-one, so decoding is total over everything [`encode_digits`] can
/// emit, regardless of which random candidates were chosen.
///
/// # Errors
///
/// Fails on the first byte outside the 50-letter alphabet — including literal
/// digits, which are intentionally not decodable as themselves. This is the
/// only validation performed; length is the caller's concern.
pub fn decode_digits(encoded: &str) -> Result<String> {
    let mut out = String::with_capacity(encoded.len());
    for (index, byte) in encoded.bytes().enumerate() {
        let digit = LOOKUP[byte as usize];
        if digit == NO_VALUE {
            return Err(Error::InvalidAlphabetByte { byte, index });
        }
        out.push(digit as char);
    }
    Ok(out)
}
