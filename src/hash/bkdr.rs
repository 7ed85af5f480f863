//! BKDR string hash
//!
//! The classic Kernighan/Ritchie multiplicative hash with the 131313
//! multiplier. Cheap, word-width, and well distributed for short keys.

/// BKDR multiplier
const BKDR_SEED: usize = 131313;

/// Compute the BKDR hash of `data`
///
/// A non-zero `seed` is folded into the initial state so that independent
/// hash streams can be derived from the same input.
#[inline]
pub fn bkdr(data: &[u8], seed: usize) -> usize {
    let mut value: usize = 0;
    if seed != 0 {
        value = value.wrapping_mul(BKDR_SEED).wrapping_add(seed);
    }
    for &byte in data {
        value = value.wrapping_mul(BKDR_SEED).wrapping_add(byte as usize);
    }
    value
}

/// Compute the BKDR hash of a string's UTF-8 bytes
#[inline]
pub fn bkdr_str(s: &str, seed: usize) -> usize {
    bkdr(s.as_bytes(), seed)
}
