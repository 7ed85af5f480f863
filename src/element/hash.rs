//! Multi-algorithm hash dispatch
//!
//! Each value width owns a small, closed family of hash algorithms selected
//! by numeric index. Indices past the end of a family widen into the next
//! family (scalar widths converge on the 32-bit family, which in turn falls
//! through to the byte-oriented digests), so a caller can request an
//! effectively unbounded sequence of decorrelated hash values from one input.
//! Open-addressing tables use this for secondary probe hashing.
//!
//! All functions are pure: the result depends only on `(value, mask, index)`
//! and always satisfies `result <= mask`. A zero `mask` (or empty byte
//! input) is a precondition violation and yields 0.

use crate::hash::{bkdr, bkdr_str, fnv32_1a, fnv32_1a_str};

/// Number of native algorithms in the u8 family
pub const HASH_U8_FAMILY: usize = 2;
/// Number of native algorithms in the u16 family
pub const HASH_U16_FAMILY: usize = 1;
/// Number of native algorithms in the u32 family
pub const HASH_U32_FAMILY: usize = 3;
/// Number of native algorithms in the u64 family
pub const HASH_U64_FAMILY: usize = 1;
/// Number of algorithms in the byte-oriented family (terminal, no widening)
pub const HASH_BYTES_FAMILY: usize = 2;

/// Knuth's multiplicative constant (2^32 / phi)
const KNUTH_RATIO: u64 = 2654435761;

#[inline]
fn knuth32(value: u32) -> usize {
    ((value as u64 * KNUTH_RATIO) >> 16) as usize
}

/// Bob Jenkins' 32 bit integer mix
#[inline]
fn jenkins32(mut value: u32) -> usize {
    value = value.wrapping_add(0x7ed55d16).wrapping_add(value << 12);
    value = (value ^ 0xc761c23c) ^ (value >> 19);
    value = value.wrapping_add(0x165667b1).wrapping_add(value << 5);
    value = value.wrapping_add(0xd3a2646c) ^ (value << 9);
    value = value.wrapping_add(0xfd7046c5).wrapping_add(value << 3);
    value = (value ^ 0xb55a4f09) ^ (value >> 16);
    value as usize
}

/// Thomas Wang's 32 bit integer mix
#[inline]
fn wang32(mut value: u32) -> usize {
    value = (!value).wrapping_add(value << 15);
    value ^= value >> 12;
    value = value.wrapping_add(value << 2);
    value ^= value >> 4;
    value = value.wrapping_mul(2057);
    value ^= value >> 16;
    value as usize
}

/// Hash an 8-bit value, selecting the algorithm by `index`
///
/// Indices past the native family replicate the byte across a 32-bit word
/// and continue in the u32 family at `index - 1`.
#[inline]
pub fn hash_u8(value: u8, mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if mask == 0 {
        return 0;
    }
    match index {
        0 => value as usize & mask,
        1 => knuth32(value as u32) & mask,
        _ => {
            let v = value as u32;
            hash_u32(v | (v << 8) | (v << 16) | (v << 24), mask, index - 1)
        }
    }
}

/// Hash a 16-bit value, selecting the algorithm by `index`
///
/// Indices past the native family replicate the half-word across a 32-bit
/// word and continue in the u32 family at the same index.
#[inline]
pub fn hash_u16(value: u16, mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if mask == 0 {
        return 0;
    }
    match index {
        0 => knuth32(value as u32) & mask,
        _ => {
            let v = value as u32;
            hash_u32(v | (v << 16), mask, index)
        }
    }
}

/// Hash a 32-bit value, selecting the algorithm by `index`
///
/// The native family has exactly three algorithms; indices past it forward
/// the value's native-endian bytes to [`hash_bytes`] at `index - 3`.
#[inline]
pub fn hash_u32(value: u32, mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if mask == 0 {
        return 0;
    }
    match index {
        0 => knuth32(value) & mask,
        1 => jenkins32(value) & mask,
        2 => wang32(value) & mask,
        _ => hash_bytes(&value.to_ne_bytes(), mask, index - HASH_U32_FAMILY),
    }
}

/// Hash a 64-bit value, selecting the algorithm by `index`
///
/// Indices past the native family hash the low and high halves in the u32
/// family at the same index and combine them with xor.
#[inline]
pub fn hash_u64(value: u64, mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if mask == 0 {
        return 0;
    }
    match index {
        0 => ((value.wrapping_mul(KNUTH_RATIO) >> 16) as usize) & mask,
        _ => {
            let lo = hash_u32(value as u32, mask, index);
            let hi = hash_u32((value >> 32) as u32, mask, index);
            (lo ^ hi) & mask
        }
    }
}

/// Hash a byte buffer, selecting the algorithm by `index`
///
/// This is the terminal family: indices past it (and empty input) yield 0.
#[inline]
pub fn hash_bytes(data: &[u8], mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if data.is_empty() || mask == 0 {
        return 0;
    }
    match index {
        0 => bkdr(data, 0) & mask,
        1 => fnv32_1a(data, 0) as usize & mask,
        _ => 0,
    }
}

/// Hash a string's UTF-8 bytes, selecting the algorithm by `index`
///
/// Indices past the native family forward to [`hash_bytes`] at the same
/// index.
#[inline]
pub fn hash_str(s: &str, mask: usize, index: usize) -> usize {
    debug_assert!(mask != 0, "hash mask must be non-zero");
    if mask == 0 {
        return 0;
    }
    match index {
        0 => bkdr_str(s, 0) & mask,
        1 => fnv32_1a_str(s, 0) as usize & mask,
        _ => hash_bytes(s.as_bytes(), mask, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASK: usize = 0xffff;

    #[test]
    fn test_determinism() {
        for index in 0..8 {
            assert_eq!(hash_u8(0xa5, MASK, index), hash_u8(0xa5, MASK, index));
            assert_eq!(hash_u32(12345, MASK, index), hash_u32(12345, MASK, index));
            assert_eq!(
                hash_bytes(b"payload", MASK, index),
                hash_bytes(b"payload", MASK, index)
            );
        }
    }

    #[test]
    fn test_mask_confinement() {
        for mask_bits in 1..16 {
            let mask = (1usize << mask_bits) - 1;
            for index in 0..8 {
                assert!(hash_u8(0x3c, mask, index) <= mask);
                assert!(hash_u16(0x3c3c, mask, index) <= mask);
                assert!(hash_u32(0xdeadbeef, mask, index) <= mask);
                assert!(hash_u64(0xdeadbeefcafebabe, mask, index) <= mask);
                assert!(hash_str("probe", mask, index) <= mask);
            }
        }
    }

    // A zero mask is a precondition violation: debug builds assert, release
    // builds return 0. One test per profile.
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hash mask must be non-zero")]
    fn test_zero_mask_asserts_in_debug() {
        hash_u32(1, 0, 0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_zero_mask_yields_zero() {
        assert_eq!(hash_u8(1, 0, 0), 0);
        assert_eq!(hash_u16(1, 0, 0), 0);
        assert_eq!(hash_u32(1, 0, 0), 0);
        assert_eq!(hash_u64(1, 0, 0), 0);
        assert_eq!(hash_bytes(b"x", 0, 0), 0);
        assert_eq!(hash_str("x", 0, 0), 0);
    }

    #[test]
    fn test_empty_bytes_yield_zero() {
        assert_eq!(hash_bytes(b"", MASK, 0), 0);
        assert_eq!(hash_bytes(b"", MASK, 1), 0);
    }

    #[test]
    fn test_u8_widening_equivalence() {
        // Past the native u8 family, the byte is replicated across a 32-bit
        // word and the u32 family takes over at the reduced index.
        let value: u8 = 0x5a;
        let v = value as u32;
        let widened = v | (v << 8) | (v << 16) | (v << 24);
        for index in HASH_U8_FAMILY..HASH_U8_FAMILY + 4 {
            assert_eq!(
                hash_u8(value, MASK, index),
                hash_u32(widened, MASK, index - 1)
            );
        }
    }

    #[test]
    fn test_u16_widening_equivalence() {
        let value: u16 = 0xbeef;
        let v = value as u32;
        for index in HASH_U16_FAMILY..HASH_U16_FAMILY + 4 {
            assert_eq!(
                hash_u16(value, MASK, index),
                hash_u32(v | (v << 16), MASK, index)
            );
        }
    }

    #[test]
    fn test_u32_widening_into_bytes() {
        let value: u32 = 0x01020304;
        assert_eq!(
            hash_u32(value, MASK, HASH_U32_FAMILY),
            hash_bytes(&value.to_ne_bytes(), MASK, 0)
        );
        assert_eq!(
            hash_u32(value, MASK, HASH_U32_FAMILY + 1),
            hash_bytes(&value.to_ne_bytes(), MASK, 1)
        );
    }

    #[test]
    fn test_u64_half_combination() {
        let value: u64 = 0x0123456789abcdef;
        let lo = hash_u32(value as u32, MASK, 1);
        let hi = hash_u32((value >> 32) as u32, MASK, 1);
        assert_eq!(hash_u64(value, MASK, 1), (lo ^ hi) & MASK);
    }

    #[test]
    fn test_str_widening_into_bytes() {
        assert_eq!(
            hash_str("probe", MASK, 2),
            hash_bytes(b"probe", MASK, 2)
        );
        // The byte family is terminal, so index 2 bottoms out at 0.
        assert_eq!(hash_str("probe", MASK, 2), 0);
    }

    #[test]
    fn test_indices_decorrelate() {
        // Different indices should give different probe positions for most
        // inputs; spot-check one value across the whole u32 family.
        let h0 = hash_u32(0xdeadbeef, MASK, 0);
        let h1 = hash_u32(0xdeadbeef, MASK, 1);
        let h2 = hash_u32(0xdeadbeef, MASK, 2);
        assert!(h0 != h1 || h1 != h2);
    }
}
