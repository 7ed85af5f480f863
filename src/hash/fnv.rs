//! FNV-1 and FNV-1a 32-bit hashes
//!
//! Fowler/Noll/Vo hashes over byte streams. FNV-1a (xor before multiply) has
//! slightly better avalanche behavior on short inputs and is the variant the
//! element hash family uses.

/// FNV 32-bit prime
const FNV32_PRIME: u32 = 16777619;

/// FNV 32-bit offset basis
const FNV32_OFFSET_BASIS: u32 = 2166136261;

#[inline]
fn fnv32_init(seed: u32) -> u32 {
    let mut value = FNV32_OFFSET_BASIS;
    if seed != 0 {
        value = value.wrapping_mul(FNV32_PRIME) ^ seed;
    }
    value
}

/// Compute the FNV-1 hash of `data`
///
/// A non-zero `seed` is folded into the offset basis.
#[inline]
pub fn fnv32(data: &[u8], seed: u32) -> u32 {
    let mut value = fnv32_init(seed);
    for &byte in data {
        value = value.wrapping_mul(FNV32_PRIME);
        value ^= byte as u32;
    }
    value
}

/// Compute the FNV-1a hash of `data`
///
/// A non-zero `seed` is folded into the offset basis.
#[inline]
pub fn fnv32_1a(data: &[u8], seed: u32) -> u32 {
    let mut value = fnv32_init(seed);
    for &byte in data {
        value ^= byte as u32;
        value = value.wrapping_mul(FNV32_PRIME);
    }
    value
}

/// Compute the FNV-1a hash of a string's UTF-8 bytes
#[inline]
pub fn fnv32_1a_str(s: &str, seed: u32) -> u32 {
    fnv32_1a(s.as_bytes(), seed)
}
