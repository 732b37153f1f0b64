//! Random value generators.
//!
//! Generators are generic over the RNG so callers can pass `thread_rng()`
//! in normal use and a seeded `StdRng` when reproducibility matters.

use rand::Rng;

use crate::error::{Error, Result};

/// Alphabet for random strings: A-Z, a-z, 0-9.
const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Alphabet for random hex strings.
const HEX_CHARS: &[u8] = b"0123456789ABCDEF";

/// Random integer in `[1, max]`.
///
/// Returns `Error::InvalidRandomBound` when `max` is 0.
pub fn random_integer<R: Rng + ?Sized>(rng: &mut R, max: u32) -> Result<u32> {
    if max < 1 {
        return Err(Error::InvalidRandomBound { max });
    }
    Ok(rng.gen_range(1..=max))
}

/// Random string of exactly `length` alphanumeric characters.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_from(rng, CHARS, length)
}

/// Random alphanumeric string with a length in `[1, max_length]`.
pub fn random_string_upto<R: Rng + ?Sized>(rng: &mut R, max_length: u32) -> Result<String> {
    let length = random_integer(rng, max_length)?;
    Ok(random_string(rng, length as usize))
}

/// Random hex string of `2 * length` characters.
///
/// `length` is a byte count; each byte is two hex digits.
pub fn random_hex_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_from(rng, HEX_CHARS, length * 2)
}

/// Random hex string for a byte length in `[1, max_length]`.
pub fn random_hex_string_upto<R: Rng + ?Sized>(rng: &mut R, max_length: u32) -> Result<String> {
    let length = random_integer(rng, max_length)?;
    Ok(random_hex_string(rng, length as usize))
}

fn random_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}
