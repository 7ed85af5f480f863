//! CRC-32 checksum (IEEE 802.3 polynomial)
//!
//! Table-driven, one byte per step. The `seed` parameter is the running CRC,
//! so a stream can be checksummed in chunks:
//! `crc32(b, crc32(a, 0)) == crc32(ab, 0)`.

/// Reflected IEEE polynomial
const CRC32_POLY: u32 = 0xEDB88320;

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ CRC32_POLY } else { crc >> 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static CRC32_TABLE: [u32; 256] = build_table();

/// Compute the CRC-32 of `data`, continuing from `seed`
///
/// Pass `0` for a fresh checksum.
#[inline]
pub fn crc32(data: &[u8], seed: u32) -> u32 {
    let mut crc = !seed;
    for &byte in data {
        crc = CRC32_TABLE[((crc ^ byte as u32) & 0xff) as usize] ^ (crc >> 8);
    }
    !crc
}
