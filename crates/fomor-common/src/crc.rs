//! ZIP-standard CRC-32 hashing.
//!
//! This is the ISO 3309 CRC-32 used by ZIP, GZIP and PNG (reflected
//! polynomial 0xEDB88320), computed with a precomputed 256-entry table.
//! The hardware CRC32 instruction on x86 uses the Castagnoli polynomial and
//! produces different values, so a table implementation is required for
//! interoperability with ZIP tooling.

/// CRC-32 lookup table (polynomial 0xEDB88320, reflected).
const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB88320;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Compute the CRC-32 hash of a byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    hash_bytes_with_seed(data, 0)
}

/// Compute the CRC-32 hash of a byte slice, continuing from a previous value.
///
/// `hash_bytes_with_seed(b, hash_bytes(a))` equals `hash_bytes(a ++ b)`.
pub fn hash_bytes_with_seed(data: &[u8], seed: u32) -> u32 {
    let mut crc = !seed;
    for &byte in data {
        crc = CRC32_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    !crc
}
